//! Alert dialog
//!
//! Blocking modal for tracking failures. Any dismiss key closes it.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

pub const DISMISS_HINT: &str = "<enter> Dismiss";

#[derive(Debug, Clone, Default)]
pub struct AlertDialogComponent;

impl AlertDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(message) = state.ui.alert.as_deref() else {
            return;
        };
        let dialog = Self::centered(area, 60, 9);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title("Alert")
            .padding(Padding::horizontal(1));
        let inner = block.inner(dialog);

        frame.render_widget(Clear, dialog);
        frame.render_widget(block, dialog);

        let [body, hint] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), body);
        frame.render_widget(
            Paragraph::new(Line::styled(DISMISS_HINT, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
            hint,
        );
    }

    /// Centers a `width` x `height` box in `area`, shrinking it to fit
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}
