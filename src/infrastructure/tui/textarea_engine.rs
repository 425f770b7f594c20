use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::composer::{CursorPosition, TextAreaState, TextSelection};
use crate::core::textarea_engine::TextAreaEngine;

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies the edit, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(jump(snapshot.cursor_position));
        if let Some(sel) = &snapshot.selection {
            textarea.move_cursor(jump(sel.start));
            textarea.start_selection();
            textarea.move_cursor(jump(sel.end));
        }
        textarea
    }

    fn snapshot(textarea: &TextArea<'_>) -> TextAreaState {
        let content = textarea.lines().join("\n");
        let (line, column) = textarea.cursor();
        let selection = textarea
            .selection_range()
            .map(|((sr, sc), (er, ec))| TextSelection {
                start: CursorPosition {
                    line: sr,
                    column: sc,
                },
                end: CursorPosition {
                    line: er,
                    column: ec,
                },
            });
        TextAreaState::new(content, CursorPosition { line, column }, selection)
    }
}

fn jump(position: CursorPosition) -> CursorMove {
    CursorMove::Jump(
        u16::try_from(position.line).unwrap_or(u16::MAX),
        u16::try_from(position.column).unwrap_or(u16::MAX),
    )
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot(&textarea)
    }

    fn insert_text(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        // Terminals deliver pasted newlines as CR
        textarea.insert_str(text.replace("\r\n", "\n").replace('\r', "\n"));
        Self::snapshot(&textarea)
    }
}
