use serde::{Deserialize, Serialize};

pub const EMPTY_DESCRIPTION_ERROR: &str = "Please enter a scenario description";

/// Cursor position in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text selection range within a text buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

/// Complete state representation of a TextArea component
/// This struct encapsulates all mutable state that needs to be
/// preserved across TextArea recreation in the stateless approach
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    pub fn empty() -> Self {
        Default::default()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Scenario description composer
#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    pub textarea: TextAreaState,
    /// Inline error shown under the text area
    pub error: Option<String>,
    /// A create request is in flight
    pub creating: bool,
}

impl ComposerState {
    /// Validates the description and marks the request as started.
    /// Returns the description to send, or `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.textarea.has_content() {
            self.error = Some(EMPTY_DESCRIPTION_ERROR.to_string());
            return None;
        }
        if self.creating {
            return None;
        }

        self.creating = true;
        self.error = None;
        Some(self.textarea.content.clone())
    }

    pub fn succeed(&mut self) {
        self.creating = false;
        self.error = None;
        self.textarea = TextAreaState::empty();
    }

    pub fn fail(&mut self, message: String) {
        self.creating = false;
        self.error = Some(message);
    }

    pub fn is_editable(&self) -> bool {
        !self.creating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn composer_with(content: &str) -> ComposerState {
        ComposerState {
            textarea: TextAreaState::new(content.to_string(), Default::default(), None),
            ..Default::default()
        }
    }

    #[test]
    fn test_whitespace_only_description_is_rejected() {
        let mut composer = composer_with("  \n\t ");

        assert_eq!(composer.begin_submit(), None);
        assert_eq!(composer.error.as_deref(), Some(EMPTY_DESCRIPTION_ERROR));
        assert!(!composer.creating);
    }

    #[test]
    fn test_submit_sends_untrimmed_description_once() {
        let mut composer = composer_with(" Oil spikes ");
        composer.error = Some("old".into());

        assert_eq!(composer.begin_submit().as_deref(), Some(" Oil spikes "));
        assert!(composer.creating);
        assert!(composer.error.is_none());
        assert!(!composer.is_editable());

        // Second submit while the first is in flight
        assert_eq!(composer.begin_submit(), None);
    }

    #[test]
    fn test_succeed_and_fail_reset_loading() {
        let mut composer = composer_with("Gold rallies");
        composer.begin_submit();
        composer.fail("Failed to create scenario".into());
        assert!(!composer.creating);
        assert_eq!(composer.textarea.content, "Gold rallies");

        composer.begin_submit();
        composer.succeed();
        assert!(!composer.creating);
        assert_eq!(composer.textarea, TextAreaState::empty());
    }
}
