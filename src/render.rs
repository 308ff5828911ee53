//! Line rendering strategies used by the joiners.
//!
//! The joiners only decide *which* line to render and with what arguments;
//! everything visual (indicators, colors, hunk header layout) lives behind
//! [`LineRenderer`].

use std::fmt;

use crossterm::style::Color;

use crate::options::DiffOptions;
use crate::text::split_trailing_whitespace;
use crate::theme::{ColorScheme, paint, paint_background};

/// Half-open line ranges in A (expected) and B (received) covered by a hunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HunkRange {
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl HunkRange {
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }

    /// Unified diff hunk header with 1-based start lines.
    pub fn header(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HunkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.a_start + 1,
            self.a_len(),
            self.b_start + 1,
            self.b_len()
        )
    }
}

/// Formatting strategy for the four kinds of output line.
pub trait LineRenderer {
    /// An unchanged line. `is_edge` is true for the first or last output line.
    fn common(&self, text: &str, is_edge: bool) -> String;
    fn delete(&self, text: &str) -> String;
    fn insert(&self, text: &str) -> String;
    fn marker(&self, range: HunkRange) -> String;
}

/// Renders lines verbatim and markers as bare hunk headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl LineRenderer for PlainRenderer {
    fn common(&self, text: &str, _is_edge: bool) -> String {
        text.to_string()
    }

    fn delete(&self, text: &str) -> String {
        text.to_string()
    }

    fn insert(&self, text: &str) -> String {
        text.to_string()
    }

    fn marker(&self, range: HunkRange) -> String {
        range.header()
    }
}

/// Renders unified diff lines: indicator, space, text.
#[derive(Debug, Clone)]
pub struct UnifiedRenderer<'a> {
    options: &'a DiffOptions,
    colors: ColorScheme,
}

impl<'a> UnifiedRenderer<'a> {
    pub fn new(options: &'a DiffOptions) -> Self {
        Self {
            options,
            colors: options.theme.colors(),
        }
    }

    fn line(&self, text: &str, is_edge: bool, indicator: &str, color: Option<Color>, dim: bool) -> String {
        if !text.is_empty() {
            let (content, trailing) = split_trailing_whitespace(text);
            let trailing = paint_background(trailing, self.colors.trailing_space);
            return paint(format!("{indicator} {content}{trailing}"), color, dim);
        }

        // An empty changed line still needs its indicator to be visible
        if indicator != " " {
            return paint(indicator.to_string(), color, dim);
        }

        let placeholder = &self.options.empty_first_or_last_line_placeholder;
        if is_edge && !placeholder.is_empty() {
            return paint(format!("{indicator} {placeholder}"), color, dim);
        }

        String::new()
    }
}

impl LineRenderer for UnifiedRenderer<'_> {
    fn common(&self, text: &str, is_edge: bool) -> String {
        self.line(
            text,
            is_edge,
            &self.options.common_indicator,
            None,
            self.colors.common_dim,
        )
    }

    fn delete(&self, text: &str) -> String {
        self.line(text, false, &self.options.a_indicator, self.colors.a, false)
    }

    fn insert(&self, text: &str) -> String {
        self.line(text, false, &self.options.b_indicator, self.colors.b, false)
    }

    fn marker(&self, range: HunkRange) -> String {
        paint(range.header(), self.colors.patch, false)
    }
}

#[cfg(test)]
mod hunk_range_tests {
    use super::*;

    #[test]
    fn test_header_is_one_based() {
        let range = HunkRange {
            a_start: 5,
            a_end: 10,
            b_start: 5,
            b_end: 11,
        };
        assert_eq!(range.header(), "@@ -6,5 +6,6 @@");
    }

    #[test]
    fn test_header_empty_range() {
        assert_eq!(HunkRange::default().header(), "@@ -1,0 +1,0 @@");
    }
}

#[cfg(test)]
mod unified_renderer_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_changed_lines_have_indicators() {
        let options = DiffOptions::default();
        let renderer = UnifiedRenderer::new(&options);
        assert_eq!(renderer.delete("old"), "- old");
        assert_eq!(renderer.insert("new"), "+ new");
        assert_eq!(renderer.common("same", false), "  same");
    }

    #[test]
    fn test_empty_changed_line_is_bare_indicator() {
        let options = DiffOptions::default();
        let renderer = UnifiedRenderer::new(&options);
        assert_eq!(renderer.delete(""), "-");
        assert_eq!(renderer.insert(""), "+");
    }

    #[test]
    fn test_empty_common_line_is_empty() {
        let options = DiffOptions::default();
        let renderer = UnifiedRenderer::new(&options);
        assert_eq!(renderer.common("", false), "");
        assert_eq!(renderer.common("", true), "");
    }

    #[test]
    fn test_empty_edge_line_uses_placeholder() {
        let options = DiffOptions {
            empty_first_or_last_line_placeholder: "↵".to_string(),
            ..DiffOptions::default()
        };
        let renderer = UnifiedRenderer::new(&options);
        assert_eq!(renderer.common("", true), "  ↵");
        assert_eq!(renderer.common("", false), "");
    }

    #[test]
    fn test_custom_indicators() {
        let options = DiffOptions {
            a_indicator: "<".to_string(),
            b_indicator: ">".to_string(),
            common_indicator: "=".to_string(),
            ..DiffOptions::default()
        };
        let renderer = UnifiedRenderer::new(&options);
        assert_eq!(renderer.delete("x"), "< x");
        assert_eq!(renderer.insert("y"), "> y");
        // A non-space common indicator is shown even for empty lines
        assert_eq!(renderer.common("", false), "=");
    }

    #[test]
    fn test_trailing_whitespace_kept_when_plain() {
        let options = DiffOptions::default();
        let renderer = UnifiedRenderer::new(&options);
        assert_eq!(renderer.insert("foo  "), "+ foo  ");
    }

    #[test]
    fn test_marker_is_header() {
        let options = DiffOptions::default();
        let renderer = UnifiedRenderer::new(&options);
        let range = HunkRange {
            a_start: 0,
            a_end: 3,
            b_start: 0,
            b_end: 4,
        };
        assert_eq!(renderer.marker(range), "@@ -1,3 +1,4 @@");
    }

    #[test]
    fn test_colored_theme_keeps_text() {
        let options = DiffOptions {
            theme: crate::theme::Theme::Dark,
            ..DiffOptions::default()
        };
        let renderer = UnifiedRenderer::new(&options);
        assert!(renderer.delete("old").contains("- old"));
    }
}
