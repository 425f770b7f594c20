//! Status bar component
//!
//! Backend address and the transient status message on the last line.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let mut spans = vec![Span::styled(
            Self::api_label(state),
            Style::default().fg(Color::Gray).italic(),
        )];
        if let Some(message) = state.system.status_message() {
            spans.push(Span::raw("  "));
            spans.push(Span::raw(message.as_str()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn api_label(state: &AppState) -> String {
        format!("API: {}", state.config.config.api.base_url)
    }
}
