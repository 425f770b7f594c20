use unicode_width::UnicodeWidthChar;

/// Hard-wraps `s` so that no line is wider than `width` terminal columns.
/// Existing line breaks are kept.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            result.push(c);
            line_width = 0;
            continue;
        }

        let char_width = c.width().unwrap_or(0);
        if line_width + char_width > width && line_width > 0 {
            result.push('\n');
            line_width = 0;
        }
        line_width += char_width;
        result.push(c);
    }

    result
}

/// Wraps `s` for display after a prefix `indent` columns wide, so every line
/// fits in `width`. Yields at least one line.
pub fn wrap_indented(s: &str, width: usize, indent: usize) -> Vec<String> {
    let body_width = width.saturating_sub(indent).max(1);
    wrap_text(s, body_width)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Keeps at most `max_lines` lines, replacing the overflow with `...`.
pub fn truncate_lines(s: &str, max_lines: usize) -> String {
    if max_lines == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() <= max_lines {
        return s.to_string();
    }
    if max_lines == 1 {
        return String::from("...");
    }
    format!("{}\n...", lines[..max_lines - 1].join("\n"))
}

/// Formats a 0-1 score as a whole percentage.
pub fn percent(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// `fixed_income` -> `Fixed Income`
pub fn title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("hello, world!", 13, "hello, world!")]
    #[case("hello, world!", 4, "hell\no, w\norld\n!")]
    #[case("ab\ncd", 1, "a\nb\nc\nd")]
    #[case("", 10, "")]
    #[case("anything", 0, "")]
    fn test_wrap_text(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(wrap_text(input, width), expected);
    }

    #[test]
    fn test_wrap_text_double_width() {
        assert_eq!(wrap_text("日本株式", 4), "日本\n株式");
        // A character wider than the line still gets placed
        assert_eq!(wrap_text("株", 1), "株");
    }

    #[rstest]
    #[case("Yields spike", 8, 2, vec!["Yields", " spike"])]
    #[case("", 10, 2, vec![""])]
    #[case("abc", 2, 4, vec!["a", "b", "c"])]
    fn test_wrap_indented(
        #[case] input: &str,
        #[case] width: usize,
        #[case] indent: usize,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(wrap_indented(input, width, indent), expected);
    }

    #[rstest]
    #[case("a\nb\nc", 3, "a\nb\nc")]
    #[case("a\nb\nc", 2, "a\n...")]
    #[case("a\nb\nc", 1, "...")]
    #[case("a\nb\nc", 0, "")]
    fn test_truncate_lines(#[case] input: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate_lines(input, max), expected);
    }

    #[rstest]
    #[case(0.0, "0%")]
    #[case(0.784, "78%")]
    #[case(0.785, "79%")]
    #[case(1.0, "100%")]
    fn test_percent(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(percent(score), expected);
    }

    #[rstest]
    #[case("fixed_income", "Fixed Income")]
    #[case("equity", "Equity")]
    #[case("short term", "Short Term")]
    #[case("", "")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }
}
