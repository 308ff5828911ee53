//! Unified diff output for two sequences of lines.

use unicode_width::UnicodeWidthStr;

use crate::diff::{ChangeCounts, DiffOp, has_changes, ops_from_lines, split_lines};
use crate::join::{join_expanded, join_windowed};
use crate::options::DiffOptions;
use crate::render::UnifiedRenderer;
use crate::text::{calculate_padding, pad_start};
use crate::theme::paint;

pub const NO_DIFF_MESSAGE: &str = "Compared values have no visual difference.";

/// The two annotation lines naming each side, followed by a blank line.
///
/// With `include_change_counts`, each line ends with the number of lines
/// removed or added, and annotations and counts are right-aligned.
pub fn print_annotation(options: &DiffOptions, counts: ChangeCounts) -> String {
    if options.omit_annotation_lines {
        return String::new();
    }

    let mut a_rest = String::new();
    let mut b_rest = String::new();
    if options.include_change_counts {
        let annotation_width = options.a_annotation.width().max(options.b_annotation.width());
        let a_count = counts.deletes.to_string();
        let b_count = counts.inserts.to_string();
        let count_width = a_count.len().max(b_count.len());

        a_rest = format!(
            "{}  {} {}",
            " ".repeat(calculate_padding(&options.a_annotation, annotation_width)),
            options.a_indicator,
            pad_start(&a_count, count_width)
        );
        b_rest = format!(
            "{}  {} {}",
            " ".repeat(calculate_padding(&options.b_annotation, annotation_width)),
            options.b_indicator,
            pad_start(&b_count, count_width)
        );
    }

    let colors = options.theme.colors();
    let a = format!("{} {}{}", options.a_indicator, options.a_annotation, a_rest);
    let b = format!("{} {}{}", options.b_indicator, options.b_annotation, b_rest);
    format!(
        "{}\n{}\n\n",
        paint(a, colors.a, false),
        paint(b, colors.b, false)
    )
}

/// Annotation followed by the expanded or windowed diff lines.
pub fn print_diff_lines(ops: &[DiffOp], options: &DiffOptions) -> String {
    let renderer = UnifiedRenderer::new(options);
    let body = if options.expand {
        join_expanded(ops, &renderer)
    } else {
        join_windowed(ops, options.context_lines, &renderer)
    };

    print_annotation(options, ChangeCounts::of(ops)) + &body
}

/// Compare two sequences of lines and print a unified diff.
pub fn diff_lines_unified(a_lines: &[&str], b_lines: &[&str], options: &DiffOptions) -> String {
    let ops = ops_from_lines(a_lines, b_lines);
    if !has_changes(&ops) {
        return NO_DIFF_MESSAGE.to_string();
    }
    print_diff_lines(&ops, options)
}

/// Split both texts on `'\n'` and print a unified diff of their lines.
pub fn diff_strings_unified(a: &str, b: &str, options: &DiffOptions) -> String {
    diff_lines_unified(&split_lines(a), &split_lines(b), options)
}


#[cfg(test)]
mod print_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expanded_print() {
        let ops = vec![
            DiffOp::equal("a"),
            DiffOp::delete("b"),
            DiffOp::insert("B"),
            DiffOp::equal(""),
        ];
        assert_eq!(
            print_diff_lines(&ops, &DiffOptions::default()),
            "- Expected\n+ Received\n\n  a\n- b\n+ B\n"
        );
    }

    #[test]
    fn test_windowed_print_uses_context_lines() {
        let ops: Vec<DiffOp> = (0..6)
            .map(|i| DiffOp::equal(format!("l{i}")))
            .chain([DiffOp::delete("x")])
            .collect();
        let options = DiffOptions {
            omit_annotation_lines: true,
            ..DiffOptions::windowed(1)
        };
        assert_eq!(print_diff_lines(&ops, &options), "@@ -6,2 +6,1 @@\n  l5\n- x");
    }

    #[test]
    fn test_no_difference() {
        assert_eq!(
            diff_lines_unified(&["a", "b"], &["a", "b"], &DiffOptions::default()),
            NO_DIFF_MESSAGE
        );
    }
}
