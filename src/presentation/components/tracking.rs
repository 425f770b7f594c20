//! Tracking dashboard
//!
//! Everything the backend knows about the tracked play, as one scrollable page.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, View},
    domain::{
        models::TrackedScenario,
        text::{wrap_indented, wrap_text},
    },
    presentation::{
        config::Action,
        widgets::{
            alert_item::AlertItem,
            news_item::NewsItem,
            theme::{asset_color, format_datetime},
        },
    },
};

pub const REFRESH_LABEL: &str = "Refresh";
pub const REFRESHING_LABEL: &str = "⟳ Refreshing...";
pub const STOP_LABEL: &str = "Stop Tracking";
pub const STOPPING_LABEL: &str = "Stopping...";
pub const ALERTS_HEADING: &str = "Alerts";
pub const UPDATES_HEADING: &str = "Play Updates";
pub const NEWS_HEADING: &str = "Recent News";
pub const NO_NEWS: &str = "No news articles available yet.";

/// Alerts listed on the dashboard
pub const MAX_ALERTS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct TrackingComponent;

impl TrackingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(tracked) = state.tracking.tracked.as_ref() else {
            return;
        };
        let lines = Self::lines(state, tracked, area.width);
        let scroll = Self::clamp_scroll(state.tracking.scroll, lines.len(), area.height);

        let page = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(page, area);
    }

    /// Scroll offset that keeps the last line on screen
    pub fn clamp_scroll(scroll: u16, content_lines: usize, height: u16) -> u16 {
        let max = u16::try_from(content_lines)
            .unwrap_or(u16::MAX)
            .saturating_sub(height);
        scroll.min(max)
    }

    /// The page content, wrapped to `width` so nothing is cut off on the right
    pub fn lines<'a>(state: &AppState, tracked: &'a TrackedScenario, width: u16) -> Vec<Line<'a>> {
        let styles = &state.config.config.styles;
        let title_style = styles.get_style(View::Tracking, "title");
        let hint_style = styles.get_style(View::Tracking, "hint");
        let width = width as usize;
        let play = &tracked.play;

        let mut lines: Vec<Line<'a>> = wrapped(&play.title, width, title_style);
        let asset_tag = Span::styled(
            format!("[{}]", play.asset_class.label()),
            Style::default().fg(asset_color(play.asset_class)),
        );
        match lines.last_mut() {
            Some(last) if last.width() + 2 + asset_tag.width() <= width => {
                last.push_span(Span::raw("  "));
                last.push_span(asset_tag);
            }
            _ => lines.push(Line::from(asset_tag)),
        }
        lines.extend(wrapped(
            &tracked.scenario.description,
            width,
            Style::default().fg(Color::Gray),
        ));
        lines.extend(wrapped(
            &format!(
                "Confidence: {}  Last updated: {}",
                play.confidence_percent(),
                format_datetime(&tracked.last_updated)
            ),
            width,
            Style::default(),
        ));
        lines.extend(wrapped(&Self::action_hints(state), width, hint_style));

        if !tracked.alerts.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(ALERTS_HEADING, title_style));
            for alert in tracked.alerts.iter().take(MAX_ALERTS) {
                let text: Text = AlertItem::new(alert, width).into();
                lines.extend(text.lines);
            }
        }

        if !tracked.play_updates.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(UPDATES_HEADING, title_style));
            for update in &tracked.play_updates {
                lines.extend(
                    wrap_indented(update, width, 2)
                        .into_iter()
                        .enumerate()
                        .map(|(i, chunk)| {
                            let bullet = if i == 0 { "• " } else { "  " };
                            Line::from(format!("{bullet}{chunk}"))
                        }),
                );
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled(NEWS_HEADING, title_style));
        if tracked.news_articles.is_empty() {
            lines.extend(wrapped(NO_NEWS, width, Style::default().fg(Color::DarkGray)));
        } else {
            let link_style = styles.get_style(View::Tracking, "link");
            for article in &tracked.news_articles {
                let text: Text = NewsItem::new(article, width).link_style(link_style).into();
                lines.extend(text.lines);
                lines.push(Line::default());
            }
        }

        lines
    }

    /// `<r> Refresh  <s> Stop Tracking`, with progress labels while busy
    pub fn action_hints(state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        let labelled = |action: Action, label: &str| match keybindings.hint_for(View::Tracking, action)
        {
            Some(hint) => format!("{hint} {label}"),
            None => label.to_string(),
        };

        let refresh = if state.tracking.refreshing {
            REFRESHING_LABEL.to_string()
        } else {
            labelled(Action::RefreshTracking, REFRESH_LABEL)
        };
        let stop = if state.tracking.stopping {
            STOPPING_LABEL.to_string()
        } else {
            labelled(Action::StopTracking, STOP_LABEL)
        };
        format!("{refresh}  {stop}")
    }
}

fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .split('\n')
        .map(|line| Line::styled(line.to_string(), style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::models::{Alert, AssetClass, NewsArticle, Play, Scenario, Severity},
        infrastructure::config::Config,
    };
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};
    use rstest::rstest;

    fn tracked(alerts: usize, news: usize) -> TrackedScenario {
        let play = Play {
            id: "p1".into(),
            asset_class: AssetClass::Equity,
            title: "Short small caps".into(),
            description: "Rates stay high".into(),
            action: "Sell".into(),
            instruments: vec!["IWM".into()],
            rationale: "Refinancing risk".into(),
            risk_level: "High".into(),
            time_horizon: "Short-term".into(),
            confidence_score: 0.7,
        };
        TrackedScenario {
            scenario: Scenario {
                id: "sc-1".into(),
                description: "Fed delays rate cuts".into(),
                interpreted_scenario: "Higher for longer".into(),
                plays: vec![play.clone()],
                created_at: Utc::now(),
                is_tracking: true,
            },
            play,
            news_articles: (0..news)
                .map(|i| NewsArticle {
                    title: format!("Headline {i}"),
                    url: format!("https://news.test/{i}"),
                    source: "Wire".into(),
                    published_at: Utc::now(),
                    summary: "Summary".into(),
                    relevance_score: 0.5,
                })
                .collect(),
            alerts: (0..alerts)
                .map(|i| Alert {
                    id: format!("a{i}"),
                    scenario_id: "sc-1".into(),
                    play_id: "p1".into(),
                    message: format!("Alert {i}"),
                    severity: Severity::Info,
                    created_at: Utc::now(),
                })
                .collect(),
            last_updated: Utc::now(),
            play_updates: vec![],
        }
    }

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_alerts_are_capped_and_sections_optional() {
        let state = AppState::new_with_config(Config::defaults().unwrap());
        let tracked = tracked(7, 0);
        let text = text_of(&TrackingComponent::lines(&state, &tracked, 80));

        let alert_lines = text.iter().filter(|l| l.contains("Alert ")).count();
        assert_eq!(alert_lines, MAX_ALERTS);
        assert!(text.iter().any(|l| l == ALERTS_HEADING));
        assert!(!text.iter().any(|l| l == UPDATES_HEADING));
        assert!(text.iter().any(|l| l == NO_NEWS));
    }

    #[test]
    fn test_news_replaces_empty_message() {
        let state = AppState::new_with_config(Config::defaults().unwrap());
        let tracked = tracked(0, 2);
        let text = text_of(&TrackingComponent::lines(&state, &tracked, 80));

        assert!(!text.iter().any(|l| l == ALERTS_HEADING));
        assert!(!text.iter().any(|l| l == NO_NEWS));
        assert!(text.iter().any(|l| l == "https://news.test/1"));
    }

    fn render_rows(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                TrackingComponent::new().view(state, frame, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_narrow_terminal_wraps_long_text() {
        let mut tracked = tracked(1, 0);
        tracked.scenario.description = "Fed delays rate cuts until inflation cools ENDDESC".into();
        tracked.alerts[0].message = "Ten year yield crossed 5% at open ENDALERT".into();
        tracked.play_updates = vec!["Credit spreads widened again this week ENDUPDATE".into()];
        let mut state = AppState::new_with_config(Config::defaults().unwrap());
        state.tracking.start(tracked.clone());

        let lines = TrackingComponent::lines(&state, &tracked, 40);
        assert!(lines.iter().all(|line| line.width() <= 40));

        let rows = render_rows(&state, 40, 30);
        for marker in ["ENDDESC", "ENDALERT", "ENDUPDATE"] {
            assert!(
                rows.iter().any(|row| row.contains(marker)),
                "{marker} missing from {rows:#?}"
            );
        }
        assert!(rows.iter().any(|row| row.trim_end() == "   ENDUPDATE"));
    }

    #[rstest]
    #[case(false, false, "<r> Refresh  <s> Stop Tracking")]
    #[case(true, false, "⟳ Refreshing...  <s> Stop Tracking")]
    #[case(false, true, "<r> Refresh  Stopping...")]
    fn test_action_hints(#[case] refreshing: bool, #[case] stopping: bool, #[case] expected: &str) {
        let mut state = AppState::new_with_config(Config::defaults().unwrap());
        state.tracking.refreshing = refreshing;
        state.tracking.stopping = stopping;
        assert_eq!(TrackingComponent::action_hints(&state), expected);
    }

    #[rstest]
    #[case(0, 50, 10, 0)]
    #[case(45, 50, 10, 40)]
    #[case(3, 5, 10, 0)]
    fn test_clamp_scroll(
        #[case] scroll: u16,
        #[case] lines: usize,
        #[case] height: u16,
        #[case] expected: u16,
    ) {
        assert_eq!(TrackingComponent::clamp_scroll(scroll, lines, height), expected);
    }
}
