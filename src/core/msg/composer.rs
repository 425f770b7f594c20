use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Messages for the scenario description composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComposerMsg {
    /// Raw key forwarded to the text area engine
    ProcessTextAreaInput(KeyEvent),
    /// Bracketed paste
    InsertText(String),
    Submit,
}

impl ComposerMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, ComposerMsg::ProcessTextAreaInput(_))
    }
}
