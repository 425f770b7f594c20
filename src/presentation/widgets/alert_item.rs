use ratatui::prelude::*;

use crate::{
    domain::{models::Alert, text::wrap_indented},
    presentation::widgets::theme::{format_datetime, severity_color},
};

/// One entry of the `Alerts` section, wrapped to `width` with a hanging indent
#[derive(Clone, Debug)]
pub struct AlertItem<'a> {
    pub alert: &'a Alert,
    pub width: usize,
}

impl<'a> AlertItem<'a> {
    pub fn new(alert: &'a Alert, width: usize) -> Self {
        Self { alert, width }
    }

    pub fn badge(&self) -> String {
        format!("[{}]", self.alert.severity.as_str().to_uppercase())
    }
}

impl<'a> From<AlertItem<'a>> for Text<'a> {
    fn from(item: AlertItem<'a>) -> Self {
        let color = severity_color(&item.alert.severity);
        let badge = Span::styled(item.badge(), Style::default().fg(color).bold());
        let indent = badge.width() + 1;

        let mut lines: Vec<Line> = wrap_indented(&item.alert.message, item.width, indent)
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let lead = if i == 0 {
                    badge.clone()
                } else {
                    Span::raw(" ".repeat(indent - 1))
                };
                Line::from(vec![
                    lead,
                    Span::raw(" "),
                    Span::styled(chunk, Style::default().fg(color)),
                ])
            })
            .collect();

        let created_at = format_datetime(&item.alert.created_at);
        let timestamp_style = Style::default().fg(Color::DarkGray);
        match lines.last_mut() {
            Some(last) if last.width() + created_at.len() + 2 <= item.width => {
                last.push_span(Span::styled(format!("  {created_at}"), timestamp_style));
            }
            // Too narrow to share the line
            _ => lines.push(Line::styled(created_at, timestamp_style)),
        }
        Text::from(lines)
    }
}
