//! Aligned diff formatting.
//!
//! Turns a sequence of line-level diff operations into readable output, either
//! every line ([`join_expanded`]) or only the lines near each change with hunk
//! markers between distant changes ([`join_windowed`]). How each line looks is
//! decided by a [`LineRenderer`]; [`UnifiedRenderer`] produces unified-diff
//! style lines driven by [`DiffOptions`].
//!
//! ```
//! use aligned_diff::{DiffOptions, diff_strings_unified};
//!
//! let output = diff_strings_unified("a\nb\nc", "a\nB\nc", &DiffOptions::default());
//! assert_eq!(output, "- Expected\n+ Received\n\n  a\n- b\n+ B\n  c");
//! ```

mod diff;
mod error;
mod join;
mod options;
mod render;
mod text;
mod theme;
mod unified;

pub use diff::{ChangeCounts, DiffOp, OpKind, has_changes, ops_from_lines, split_lines};
pub use error::FormatError;
pub use join::{DEFAULT_CONTEXT_LINES, join_expanded, join_windowed};
pub use options::DiffOptions;
pub use render::{HunkRange, LineRenderer, PlainRenderer, UnifiedRenderer};
pub use theme::{ColorScheme, Theme};
pub use unified::{
    NO_DIFF_MESSAGE, diff_lines_unified, diff_strings_unified, print_annotation, print_diff_lines,
};
