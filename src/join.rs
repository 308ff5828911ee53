//! Joining aligned diff operations into output text.
//!
//! [`join_expanded`] prints every operation. [`join_windowed`] keeps only
//! `context_lines` unchanged lines around each change and separates distant
//! changes with hunk markers.
//!
//! Windowing takes two passes over the same runs of operations. The first
//! measures how many lines and markers the output will have, which is needed
//! up front because the first and last output lines are rendered as edges.
//! The second emits lines. A marker's range is only known once the trailing
//! context of its hunk has been emitted, so markers are pushed as empty slots
//! and rendered after emission finishes.

use log::{debug, trace};

use crate::diff::{DiffOp, OpKind, has_changes};
use crate::render::{HunkRange, LineRenderer};

/// Same context size as unified diff.
pub const DEFAULT_CONTEXT_LINES: usize = 5;

/// Render every operation as one line, in order.
pub fn join_expanded<R: LineRenderer + ?Sized>(ops: &[DiffOp], renderer: &R) -> String {
    let last = ops.len().saturating_sub(1);

    ops.iter()
        .enumerate()
        .map(|(i, op)| match op.kind {
            OpKind::Delete => renderer.delete(&op.text),
            OpKind::Insert => renderer.insert(&op.text),
            OpKind::Equal => renderer.common(&op.text, i == 0 || i == last),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render operations keeping at most `context_lines` unchanged lines around
/// each change, with a hunk marker wherever unchanged lines were left out.
///
/// Input without any change is rendered in full, like [`join_expanded`].
pub fn join_windowed<R: LineRenderer + ?Sized>(
    ops: &[DiffOp],
    context_lines: usize,
    renderer: &R,
) -> String {
    if !has_changes(ops) {
        return join_expanded(ops, renderer);
    }

    let window = Window::new(context_lines);
    let measurement = window.measure(ops);
    debug!(
        "windowed join: {} ops into {} lines with {} markers",
        ops.len(),
        measurement.line_count,
        measurement.markers
    );

    window.emit(ops, &measurement, renderer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Common,
    Change,
}

/// Maximal stretch of operations that are all equal or all changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    kind: RunKind,
    start: usize,
    end: usize,
}

impl Run {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

struct Runs<'a> {
    ops: &'a [DiffOp],
    pos: usize,
}

impl<'a> Runs<'a> {
    fn new(ops: &'a [DiffOp]) -> Self {
        Self { ops, pos: 0 }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let first = self.ops.get(self.pos)?;
        let start = self.pos;
        let equal = first.is_equal();
        while self.pos < self.ops.len() && self.ops[self.pos].is_equal() == equal {
            self.pos += 1;
        }
        let kind = if equal { RunKind::Common } else { RunKind::Change };
        Some(Run {
            kind,
            start,
            end: self.pos,
        })
    }
}

/// Where a run of unchanged lines sits relative to the changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Start,
    End,
    Between,
}

impl Placement {
    fn of(run: &Run, total: usize) -> Self {
        if run.start == 0 {
            Placement::Start
        } else if run.end == total {
            Placement::End
        } else {
            Placement::Between
        }
    }
}

/// Result of the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Measurement {
    /// Output lines including markers
    line_count: usize,
    markers: usize,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    context: usize,
    /// A run between two changes supplies context to both of them
    between: usize,
}

impl Window {
    fn new(context: usize) -> Self {
        Self {
            context,
            between: context.saturating_mul(2),
        }
    }

    fn measure(&self, ops: &[DiffOp]) -> Measurement {
        let mut line_count = ops.len();
        let mut excess_at_edge = false;
        let mut excesses_between = 0;

        for run in Runs::new(ops).filter(|run| run.kind == RunKind::Common) {
            let n = run.len();
            match Placement::of(&run, ops.len()) {
                Placement::Start | Placement::End => {
                    if n > self.context {
                        line_count -= n - self.context;
                        excess_at_edge = true;
                    }
                }
                Placement::Between => {
                    if n > self.between {
                        line_count -= n - self.between;
                        excesses_between += 1;
                    }
                }
            }
        }

        let markers = if excesses_between != 0 {
            excesses_between + 1
        } else if excess_at_edge {
            1
        } else {
            0
        };

        Measurement {
            line_count: line_count + markers,
            markers,
        }
    }

    fn emit<R: LineRenderer + ?Sized>(
        &self,
        ops: &[DiffOp],
        measurement: &Measurement,
        renderer: &R,
    ) -> String {
        let mut out = Emitter::new(renderer, measurement.line_count);
        let has_markers = measurement.markers != 0;
        if has_markers {
            out.open_marker();
        }

        for run in Runs::new(ops) {
            let run_ops = &ops[run.start..run.end];
            if run.kind == RunKind::Change {
                for op in run_ops.iter().filter(|op| op.kind == OpKind::Delete) {
                    out.push_delete(&op.text);
                }
                for op in run_ops.iter().filter(|op| op.kind == OpKind::Insert) {
                    out.push_insert(&op.text);
                }
                continue;
            }

            let n = run.len();
            match Placement::of(&run, ops.len()) {
                Placement::Start => {
                    let skip = n.saturating_sub(self.context);
                    if skip != 0 {
                        // Leading lines are equal in both sequences, so the
                        // skipped count is also the first line index of each
                        out.cursor = HunkRange {
                            a_start: skip,
                            a_end: skip,
                            b_start: skip,
                            b_end: skip,
                        };
                    }
                    out.push_commons(&run_ops[skip..]);
                }
                Placement::End => {
                    out.push_commons(&run_ops[..n.min(self.context)]);
                }
                Placement::Between if n > self.between => {
                    out.push_commons(&run_ops[..self.context]);
                    out.close_marker();
                    out.open_marker();
                    out.skip(n - self.between);
                    out.push_commons(&run_ops[n - self.context..]);
                }
                Placement::Between => {
                    out.push_commons(run_ops);
                }
            }
        }

        if has_markers {
            out.close_marker();
        }

        out.finish()
    }
}

enum Slot {
    Line(String),
    Marker,
}

/// Second pass state: output slots plus the span covered since the last marker.
struct Emitter<'r, R: ?Sized> {
    renderer: &'r R,
    slots: Vec<Slot>,
    ranges: Vec<HunkRange>,
    cursor: HunkRange,
    last_index: usize,
}

impl<'r, R: LineRenderer + ?Sized> Emitter<'r, R> {
    fn new(renderer: &'r R, line_count: usize) -> Self {
        Self {
            renderer,
            slots: Vec::with_capacity(line_count),
            ranges: Vec::new(),
            cursor: HunkRange::default(),
            last_index: line_count.saturating_sub(1),
        }
    }

    fn push_commons(&mut self, ops: &[DiffOp]) {
        for op in ops {
            let j = self.slots.len();
            let line = self.renderer.common(&op.text, j == 0 || j == self.last_index);
            self.slots.push(Slot::Line(line));
            self.cursor.a_end += 1;
            self.cursor.b_end += 1;
        }
    }

    fn push_delete(&mut self, text: &str) {
        self.slots.push(Slot::Line(self.renderer.delete(text)));
        self.cursor.a_end += 1;
    }

    fn push_insert(&mut self, text: &str) {
        self.slots.push(Slot::Line(self.renderer.insert(text)));
        self.cursor.b_end += 1;
    }

    fn open_marker(&mut self) {
        trace!("marker slot at line {}", self.slots.len());
        self.slots.push(Slot::Marker);
    }

    fn close_marker(&mut self) {
        trace!("marker range {:?}", self.cursor);
        self.ranges.push(self.cursor);
    }

    /// Start the next hunk after `omitted` unchanged lines.
    fn skip(&mut self, omitted: usize) {
        let a = self.cursor.a_end + omitted;
        let b = self.cursor.b_end + omitted;
        self.cursor = HunkRange {
            a_start: a,
            a_end: a,
            b_start: b,
            b_end: b,
        };
    }

    fn finish(self) -> String {
        let renderer = self.renderer;
        let mut ranges = self.ranges.into_iter();
        self.slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Line(line) => line,
                Slot::Marker => ranges
                    .next()
                    .map(|range| renderer.marker(range))
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
