use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::models::Play,
    presentation::widgets::{
        shrink_text::ShrinkText,
        theme::{asset_color, risk_color},
    },
};

pub const TRACK_LABEL: &str = "Track This Play";
pub const TRACKING_LABEL: &str = "Tracking...";

/// Lines kept for each free-text paragraph of a card that is not highlighted
const MAX_PARAGRAPH_LINES: usize = 3;

#[derive(Clone, Debug)]
pub struct PlayCard {
    pub play: Play,
    pub padding: Padding, // Only use to calc width/height
    pub highlight: bool,
    pub tracking_loading: bool,
    /// Key hint shown on the highlighted card, e.g. `<enter>`
    pub track_hint: Option<String>,
}

impl PlayCard {
    pub fn new(play: Play, padding: Padding) -> Self {
        PlayCard {
            play,
            padding,
            highlight: false,
            tracking_loading: false,
            track_hint: None,
        }
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn tracking_loading(mut self, tracking_loading: bool) -> Self {
        self.tracking_loading = tracking_loading;
        self
    }

    pub fn track_hint(mut self, hint: Option<String>) -> Self {
        self.track_hint = hint;
        self
    }

    /// The highlighted card shows its paragraphs in full
    fn paragraph_lines(&self) -> usize {
        if self.highlight {
            usize::MAX
        } else {
            MAX_PARAGRAPH_LINES
        }
    }

    fn description(&self, width: usize) -> ShrinkText<'_> {
        ShrinkText::new(self.play.description.as_str(), width, self.paragraph_lines())
    }

    fn rationale(&self, width: usize) -> ShrinkText<'static> {
        ShrinkText::new(
            format!("Rationale: {}", self.play.rationale),
            width,
            self.paragraph_lines(),
        )
    }

    pub fn track_label(&self) -> &'static str {
        if self.tracking_loading {
            TRACKING_LABEL
        } else {
            TRACK_LABEL
        }
    }

    pub fn calculate_height(&self, area: &Rect) -> u16 {
        let width = area
            .width
            .saturating_sub(self.padding.left + self.padding.right) as usize;

        // title + action + instruments + risk + track + separator
        let fixed_lines = 6;
        let paragraphs = self.description(width).height() + self.rationale(width).height();

        fixed_lines + paragraphs as u16
    }
}

impl Widget for PlayCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let mut text = Text::default();

        let title_style = if self.highlight {
            Style::default().bold().fg(Color::Yellow)
        } else {
            Style::default().bold()
        };
        let marker = if self.highlight { "▶ " } else { "  " };
        text.extend(Text::from(Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(self.play.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", self.play.asset_class.label()),
                Style::default().fg(asset_color(self.play.asset_class)),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} confidence", self.play.confidence_percent()),
                Style::default().fg(Color::Cyan),
            ),
        ])));

        text.extend(Text::from(Line::from(vec![
            Span::styled("Action: ", Style::default().fg(Color::Gray)),
            Span::raw(self.play.action.clone()),
        ])));
        text.extend(Text::from(Line::from(vec![
            Span::styled("Instruments: ", Style::default().fg(Color::Gray)),
            Span::raw(self.play.instruments_label()),
        ])));

        text.extend::<Text>(self.description(width).into());
        text.extend(Text::styled(
            self.rationale(width).shrink(),
            Style::default().fg(Color::Gray),
        ));

        text.extend(Text::from(Line::from(vec![
            Span::styled("Risk: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.play.risk_level.clone(),
                Style::default().fg(risk_color(&self.play.risk_level)),
            ),
            Span::styled("  Horizon: ", Style::default().fg(Color::Gray)),
            Span::raw(self.play.time_horizon.clone()),
        ])));

        let track = match (&self.track_hint, self.highlight) {
            (Some(hint), true) if !self.tracking_loading => {
                format!("{hint} {}", self.track_label())
            }
            _ => self.track_label().to_string(),
        };
        let track_style = if self.highlight {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        text.extend(Text::from(Line::styled(track, track_style)));

        text.extend(Text::styled(
            "─".repeat(width),
            Style::default().fg(Color::Gray),
        ));

        Paragraph::new(text).render(area, buf);
    }
}
