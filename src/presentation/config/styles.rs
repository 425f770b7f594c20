use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::core::state::View;

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<View, HashMap<String, Style>>);

impl Styles {
    /// Style named `key` for `view`, or the default style
    pub fn get_style(&self, view: View, key: &str) -> Style {
        self.0
            .get(&view)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<View, HashMap<String, String>>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(view, inner_map)| {
                let converted = inner_map
                    .into_iter()
                    .map(|(name, style)| (name, parse_style(&style)))
                    .collect();
                (view, converted)
            })
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `"bold yellow on blue"` style strings
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_ascii_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let mut modifiers = Modifier::empty();
    let mut color = Vec::new();

    for word in color_str.split_whitespace() {
        match word.to_lowercase().as_str() {
            "bold" => modifiers |= Modifier::BOLD,
            "underline" | "underlined" => modifiers |= Modifier::UNDERLINED,
            "inverse" => modifiers |= Modifier::REVERSED,
            "bright" => {}
            "grey" => color.push("gray".to_string()),
            other => color.push(other.to_string()),
        }
    }

    (color.join(" "), modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.to_lowercase().as_str() {
        "" => None,
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" => Some(Color::Gray),
        "darkgray" | "dark gray" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        other => other.parse::<Color>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("red", Style::default().fg(Color::Red))]
    #[case("bold yellow", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))]
    #[case("cyan underlined", Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED))]
    #[case("bold", Style::default().add_modifier(Modifier::BOLD))]
    #[case("white on blue", Style::default().fg(Color::White).bg(Color::Blue))]
    #[case("darkgray", Style::default().fg(Color::DarkGray))]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_deserialize_and_lookup() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "Plays": { "selected": "bold yellow" } }"#)?;

        assert_eq!(
            styles.get_style(View::Plays, "selected"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        );
        assert_eq!(styles.get_style(View::Plays, "missing"), Style::default());
        assert_eq!(styles.get_style(View::Create, "selected"), Style::default());
        Ok(())
    }
}
