//! Plays view
//!
//! The backend's reading of the scenario followed by one card per play.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListView};

use crate::{
    core::state::{AppState, View},
    domain::{models::Scenario, text::wrap_text},
    presentation::{config::Action, widgets::play_card::PlayCard},
};

pub const HEADING: &str = "Investment Plays";
pub const ANALYSIS_TITLE: &str = "Analysis:";
pub const NO_PLAYS: &str = "The agent found no plays for this scenario.";

/// Selectable list of play cards
///
/// Selection lives in `PlaysState`, the list state is rebuilt per frame.
#[derive(Debug, Clone, Default)]
pub struct PlaysComponent;

impl PlaysComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(scenario) = state.plays.scenario.as_ref() else {
            return;
        };
        let styles = &state.config.config.styles;
        let analysis_height = Self::analysis_height(scenario, area.width);

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),               // heading
                Constraint::Length(2),               // scenario description
                Constraint::Length(analysis_height), // interpretation
                Constraint::Min(0),                  // cards
            ],
        )
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::styled(HEADING, styles.get_style(View::Plays, "title"))),
            layout[0],
        );
        frame.render_widget(
            Paragraph::new(scenario.description.as_str())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            layout[1],
        );
        frame.render_widget(
            Paragraph::new(scenario.interpreted_scenario.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(ANALYSIS_TITLE),
                ),
            layout[2],
        );

        self.draw_cards(state, frame, layout[3]);
    }

    fn draw_cards(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let padding = Padding::new(1, 1, 0, 0);
        let items = Self::cards(state, area, padding);
        let item_count = items.len();

        if item_count == 0 {
            let empty = Paragraph::new(NO_PLAYS)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let builder = ListBuilder::new(move |context| {
            let mut item = items[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(state.plays.selected_index);

        let list = ListView::new(builder, item_count).block(Block::default().padding(padding));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Cards with their heights
    pub fn cards(state: &AppState, area: Rect, padding: Padding) -> Vec<(PlayCard, u16)> {
        let Some(scenario) = state.plays.scenario.as_ref() else {
            return vec![];
        };
        let hint = state
            .config
            .config
            .keybindings
            .hint_for(View::Plays, Action::TrackPlay);

        scenario
            .plays
            .iter()
            .enumerate()
            .map(|(i, play)| {
                let card = PlayCard::new(play.clone(), padding)
                    .highlight(state.plays.selected_index == Some(i))
                    .tracking_loading(state.plays.tracking_loading)
                    .track_hint(hint.clone());
                let height = card.calculate_height(&area);
                (card, height)
            })
            .collect()
    }

    fn analysis_height(scenario: &Scenario, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2).max(1) as usize;
        let lines = wrap_text(&scenario.interpreted_scenario, inner_width)
            .lines()
            .count()
            .clamp(1, 6);
        lines as u16 + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::models::{AssetClass, Play},
        infrastructure::config::Config,
    };
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn scenario(plays: usize) -> Scenario {
        Scenario {
            id: "sc-1".into(),
            description: "Oil supply shock".into(),
            interpreted_scenario: "Energy prices rise sharply".into(),
            plays: (0..plays)
                .map(|i| Play {
                    id: format!("p{i}"),
                    asset_class: AssetClass::Commodity,
                    title: format!("Play {i}"),
                    description: "Buy energy".into(),
                    action: "Buy".into(),
                    instruments: vec!["XLE".into()],
                    rationale: "Supply".into(),
                    risk_level: "High".into(),
                    time_horizon: "Short-term".into(),
                    confidence_score: 0.6,
                })
                .collect(),
            created_at: Utc::now(),
            is_tracking: false,
        }
    }

    #[test]
    fn test_cards_carry_hint_and_loading_flag() {
        let mut state = AppState::new_with_config(Config::defaults().unwrap());
        state.plays.set_scenario(scenario(2));
        state.plays.tracking_loading = true;

        let cards = PlaysComponent::cards(&state, Rect::new(0, 0, 80, 40), Padding::ZERO);

        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|(card, _)| card.tracking_loading));
        assert_eq!(cards[0].0.track_hint.as_deref(), Some("<enter>"));
        assert!(cards.iter().all(|(_, height)| *height >= 6));
    }

    #[test]
    fn test_selected_card_is_measured_in_full() {
        let mut long = scenario(2);
        for play in &mut long.plays {
            play.rationale = "word ".repeat(60);
        }
        let mut state = AppState::new_with_config(Config::defaults().unwrap());
        state.plays.set_scenario(long);

        let cards = PlaysComponent::cards(&state, Rect::new(0, 0, 40, 40), Padding::ZERO);

        assert_eq!(state.plays.selected_index, Some(0));
        assert!(cards[0].0.highlight);
        assert!(!cards[1].0.highlight);
        assert!(cards[0].1 > cards[1].1);
    }

    #[test]
    fn test_analysis_height_is_bounded() {
        let mut long = scenario(0);
        long.interpreted_scenario = "word ".repeat(200);
        assert_eq!(PlaysComponent::analysis_height(&long, 40), 8);
        assert_eq!(PlaysComponent::analysis_height(&scenario(0), 80), 3);
    }
}
