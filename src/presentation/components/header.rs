//! Header component
//!
//! App title, subtitle and the way back to a new scenario.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, View},
    presentation::config::Action,
};

pub const APP_TITLE: &str = "Hedge Fund Agent";
pub const APP_SUBTITLE: &str = "AI-Powered Trading Guidance";
pub const NEW_SCENARIO_LABEL: &str = "← New Scenario";

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    /// Required height, including the bottom border
    pub const HEIGHT: u16 = 2;

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Line::from(vec![
            Span::styled(APP_TITLE, Style::default().bold().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(title), inner);

        if let Some(back) = Self::back_label(state) {
            let back = Paragraph::new(Line::styled(back, Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Right);
            frame.render_widget(back, inner);
        }
    }

    /// `← New Scenario` with its key, outside the create view
    pub fn back_label(state: &AppState) -> Option<String> {
        let view = state.view();
        if view == View::Create {
            return None;
        }
        let label = match state
            .config
            .config
            .keybindings
            .hint_for(view, Action::BackToCreate)
        {
            Some(hint) => format!("{NEW_SCENARIO_LABEL} {hint}"),
            None => NEW_SCENARIO_LABEL.to_string(),
        };
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_back_label_only_outside_create() {
        let mut state = AppState::new_with_config(Config::defaults().unwrap());
        assert_eq!(HeaderComponent::back_label(&state), None);

        state.ui.view = View::Plays;
        assert_eq!(
            HeaderComponent::back_label(&state).as_deref(),
            Some("← New Scenario <esc>")
        );

        // Without bindings the label is still shown
        let mut bare = AppState::default();
        bare.ui.view = View::Tracking;
        assert_eq!(
            HeaderComponent::back_label(&bare).as_deref(),
            Some(NEW_SCENARIO_LABEL)
        );
    }
}
