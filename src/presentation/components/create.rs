//! Create view
//!
//! The scenario description form.

use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::state::{AppState, View},
    presentation::config::Action,
};

pub const HEADLINE: &str = "Discover Investment Opportunities";
pub const EXPLANATION: &str = "Describe a market scenario and the agent will suggest \
investment plays across equities, commodities and fixed income.";
pub const PLACEHOLDER: &str =
    "e.g., S&P 500 down 5% over the next month, or Fed delays interest rate cuts";
pub const SUBMIT_LABEL: &str = "Generate Investment Plays";
pub const SUBMITTING_LABEL: &str = "Analyzing Scenario...";

/// Scenario input form
///
/// The TextArea is rebuilt from the composer snapshot on every render.
#[derive(Debug, Clone, Default)]
pub struct CreateComponent;

impl CreateComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // headline
                Constraint::Length(3), // explanation
                Constraint::Min(5),    // text area
                Constraint::Length(1), // inline error
                Constraint::Length(1), // submit hint
            ],
        )
        .split(area);

        let title_style = styles.get_style(View::Create, "title");
        frame.render_widget(Paragraph::new(Line::styled(HEADLINE, title_style)), layout[0]);
        frame.render_widget(
            Paragraph::new(EXPLANATION)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            layout[1],
        );

        let textarea = Self::textarea(state);
        frame.render_widget(&textarea, layout[2]);

        if let Some(error) = &state.composer.error {
            let error_style = styles.get_style(View::Create, "error");
            frame.render_widget(
                Paragraph::new(Line::styled(error.as_str(), error_style)),
                layout[3],
            );
        }

        frame.render_widget(
            Paragraph::new(Line::styled(
                Self::submit_label(state),
                styles.get_style(View::Create, "hint"),
            )),
            layout[4],
        );
    }

    fn textarea(state: &AppState) -> TextArea<'static> {
        let snapshot = &state.composer.textarea;
        let lines: Vec<String> = snapshot.content.split('\n').map(String::from).collect();
        let mut textarea = TextArea::new(lines);
        textarea.move_cursor(CursorMove::Jump(
            u16::try_from(snapshot.cursor_position.line).unwrap_or(u16::MAX),
            u16::try_from(snapshot.cursor_position.column).unwrap_or(u16::MAX),
        ));
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
        textarea.set_cursor_line_style(Style::default());

        let border_style = if state.composer.creating {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Scenario"),
        );
        if state.composer.creating || state.ui.has_alert() {
            // Hide the cursor while the form is locked
            textarea.set_cursor_style(Style::default());
        }
        textarea
    }

    /// Submit hint, e.g. `<ctrl-s> Generate Investment Plays`
    pub fn submit_label(state: &AppState) -> String {
        if state.composer.creating {
            return SUBMITTING_LABEL.to_string();
        }
        match state
            .config
            .config
            .keybindings
            .hint_for(View::Create, Action::SubmitScenario)
        {
            Some(hint) => format!("{hint} {SUBMIT_LABEL}"),
            None => SUBMIT_LABEL.to_string(),
        }
    }
}
