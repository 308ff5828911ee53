//! Line-level diff operations: the input consumed by the joiners.

use similar::{Algorithm, ChangeTag, TextDiff};

use crate::error::FormatError;

/// Classification of a single aligned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Present in both sequences
    Equal,
    /// Present only in the left (expected) sequence
    Delete,
    /// Present only in the right (received) sequence
    Insert,
}

impl TryFrom<i8> for OpKind {
    type Error = FormatError;

    /// Maps the conventional numeric codes: `-1` delete, `0` equal, `1` insert.
    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(OpKind::Delete),
            0 => Ok(OpKind::Equal),
            1 => Ok(OpKind::Insert),
            other => Err(FormatError::UnknownOpKind(other)),
        }
    }
}

impl From<ChangeTag> for OpKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => OpKind::Equal,
            ChangeTag::Delete => OpKind::Delete,
            ChangeTag::Insert => OpKind::Insert,
        }
    }
}

/// One classified line of an aligned comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    pub kind: OpKind,
    pub text: String,
}

impl DiffOp {
    pub fn new(kind: OpKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(OpKind::Equal, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(OpKind::Delete, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(OpKind::Insert, text)
    }

    pub fn is_equal(&self) -> bool {
        self.kind == OpKind::Equal
    }
}

/// Number of removed and added lines in a sequence of operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    pub deletes: usize,
    pub inserts: usize,
}

impl ChangeCounts {
    pub fn of(ops: &[DiffOp]) -> Self {
        ops.iter().fold(Self::default(), |mut counts, op| {
            match op.kind {
                OpKind::Delete => counts.deletes += 1,
                OpKind::Insert => counts.inserts += 1,
                OpKind::Equal => {}
            }
            counts
        })
    }
}

/// True when at least one line was removed or added.
pub fn has_changes(ops: &[DiffOp]) -> bool {
    ops.iter().any(|op| !op.is_equal())
}

/// Split text into lines on `'\n'` only.
/// An empty string has no lines at all, rather than one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Align two line sequences with Myers diff and classify every line.
/// Within a replaced block the removed lines come before the added ones.
pub fn ops_from_lines(a: &[&str], b: &[&str]) -> Vec<DiffOp> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(a, b);

    diff.iter_all_changes()
        .map(|change| DiffOp::new(change.tag().into(), change.value()))
        .collect()
}

#[cfg(test)]
mod op_kind_tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(OpKind::try_from(-1), Ok(OpKind::Delete));
        assert_eq!(OpKind::try_from(0), Ok(OpKind::Equal));
        assert_eq!(OpKind::try_from(1), Ok(OpKind::Insert));
    }

    #[test]
    fn test_unknown_code_fails() {
        assert_eq!(OpKind::try_from(2), Err(FormatError::UnknownOpKind(2)));
        assert_eq!(OpKind::try_from(-7), Err(FormatError::UnknownOpKind(-7)));
    }
}
