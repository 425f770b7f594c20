use ratatui::prelude::*;

use crate::{
    domain::{models::NewsArticle, text},
    presentation::widgets::{shrink_text::ShrinkText, theme::format_date},
};

const MAX_SUMMARY_LINES: usize = 4;

/// One article of the `Recent News` section
#[derive(Clone, Debug)]
pub struct NewsItem<'a> {
    pub article: &'a NewsArticle,
    pub width: usize,
    pub link_style: Style,
}

impl<'a> NewsItem<'a> {
    pub fn new(article: &'a NewsArticle, width: usize) -> Self {
        Self {
            article,
            width,
            link_style: Style::default().fg(Color::Cyan).underlined(),
        }
    }

    pub fn link_style(mut self, style: Style) -> Self {
        self.link_style = style;
        self
    }

    /// `Reuters · 2024-05-01 · 82% relevant`
    pub fn meta(&self) -> String {
        format!(
            "{} · {} · {} relevant",
            self.article.source,
            format_date(&self.article.published_at),
            self.article.relevance_percent()
        )
    }
}

impl<'a> From<NewsItem<'a>> for Text<'a> {
    fn from(item: NewsItem<'a>) -> Self {
        let wrapped = |s: &str, style: Style| {
            Text::from(text::wrap_text(s, item.width)).style(style)
        };

        let mut text = wrapped(&item.article.title, Style::default().bold());
        text.extend(wrapped(&item.article.url, item.link_style));
        text.extend::<Text>(
            ShrinkText::new(item.article.summary.as_str(), item.width, MAX_SUMMARY_LINES).into(),
        );
        text.extend(wrapped(&item.meta(), Style::default().fg(Color::DarkGray)));
        text
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn article() -> NewsArticle {
        NewsArticle {
            title: "Fed signals patience".into(),
            url: "https://news.example/fed".into(),
            source: "Reuters".into(),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            summary: "Officials see no rush to cut rates.".into(),
            relevance_score: 0.82,
        }
    }

    #[test]
    fn test_news_item_lines() {
        let article = article();
        let text: Text = NewsItem::new(&article, 80).into();
        let lines: Vec<String> = text.lines.iter().map(|line| line.to_string()).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Fed signals patience");
        assert_eq!(lines[1], "https://news.example/fed");
        assert_eq!(lines[2], "Officials see no rush to cut rates.");
        assert!(lines[3].starts_with("Reuters · "));
        assert!(lines[3].ends_with("82% relevant"));
    }

    #[test]
    fn test_narrow_item_wraps_title_and_url() {
        let article = article();
        let text: Text = NewsItem::new(&article, 12).into();

        assert!(text.lines.iter().all(|line| line.width() <= 12));
        let joined: String = text.lines.iter().map(|line| line.to_string()).collect();
        assert!(joined.contains("https://news.example/fed"));
    }
}
