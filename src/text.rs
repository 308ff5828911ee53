use unicode_width::UnicodeWidthStr;

/// Calculate padding needed to reach visual width.
/// Returns number of spaces needed.
pub fn calculate_padding(current_text: &str, target_width: usize) -> usize {
    target_width.saturating_sub(current_text.width())
}

/// Left-pad `text` with spaces until it is `target_width` columns wide.
pub fn pad_start(text: &str, target_width: usize) -> String {
    let mut padded = " ".repeat(calculate_padding(text, target_width));
    padded.push_str(text);
    padded
}

/// Split a line into its content and the whitespace that trails it.
pub fn split_trailing_whitespace(line: &str) -> (&str, &str) {
    let content = line.trim_end();
    (content, &line[content.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_ascii() {
        assert_eq!(calculate_padding("abc", 5), 2);
        assert_eq!(calculate_padding("abcdef", 5), 0);
    }

    #[test]
    fn test_padding_wide_chars() {
        // CJK characters take two columns each
        assert_eq!(calculate_padding("日本", 5), 1);
    }

    #[test]
    fn test_pad_start() {
        assert_eq!(pad_start("7", 3), "  7");
        assert_eq!(pad_start("123", 2), "123");
    }

    #[test]
    fn test_split_trailing_whitespace() {
        assert_eq!(split_trailing_whitespace("foo  \t"), ("foo", "  \t"));
        assert_eq!(split_trailing_whitespace("  foo"), ("  foo", ""));
        assert_eq!(split_trailing_whitespace("   "), ("", "   "));
    }
}
