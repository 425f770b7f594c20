use std::borrow::Cow;

use ratatui::text::Text;

use crate::domain::text;

/// Text wrapped to `width` and cut to `max_height` lines
#[derive(Clone, Debug, Default)]
pub struct ShrinkText<'a> {
    pub content: Cow<'a, str>,
    pub width: usize,
    pub max_height: usize,
}

impl<'a> ShrinkText<'a> {
    pub fn new<T>(content: T, width: usize, max_height: usize) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            content: content.into(),
            width,
            max_height,
        }
    }

    pub fn shrink(&self) -> String {
        text::truncate_lines(&text::wrap_text(&self.content, self.width), self.max_height)
    }

    pub fn height(&self) -> usize {
        if self.content.is_empty() {
            return 0;
        }
        self.shrink().lines().count()
    }
}

impl<'a> From<ShrinkText<'a>> for Text<'a> {
    fn from(value: ShrinkText) -> Self {
        Text::from(value.shrink())
    }
}
