//! Caller-facing configuration for unified diff output.

use crate::error::FormatError;
use crate::join::DEFAULT_CONTEXT_LINES;
use crate::theme::Theme;

/// Options controlling annotation, indicators, windowing and colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub a_annotation: String,
    pub b_annotation: String,
    pub a_indicator: String,
    pub b_indicator: String,
    pub common_indicator: String,
    /// Unchanged lines kept around each change when not expanded
    pub context_lines: usize,
    /// Print every line instead of windowing around changes
    pub expand: bool,
    pub include_change_counts: bool,
    pub omit_annotation_lines: bool,
    /// Shown for an empty unchanged line at the very top or bottom, where it
    /// would otherwise be invisible
    pub empty_first_or_last_line_placeholder: String,
    pub theme: Theme,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            a_annotation: "Expected".to_string(),
            b_annotation: "Received".to_string(),
            a_indicator: "-".to_string(),
            b_indicator: "+".to_string(),
            common_indicator: " ".to_string(),
            context_lines: DEFAULT_CONTEXT_LINES,
            expand: true,
            include_change_counts: false,
            omit_annotation_lines: false,
            empty_first_or_last_line_placeholder: String::new(),
            theme: Theme::Plain,
        }
    }
}

impl DiffOptions {
    /// Set the context window from a signed value, rejecting negatives.
    pub fn with_context_lines(mut self, context_lines: i64) -> Result<Self, FormatError> {
        self.context_lines = usize::try_from(context_lines)
            .map_err(|_| FormatError::NegativeContextLines(context_lines))?;
        Ok(self)
    }

    /// Windowed output with the given context size.
    pub fn windowed(context_lines: usize) -> Self {
        Self {
            context_lines,
            expand: false,
            ..Self::default()
        }
    }
}
