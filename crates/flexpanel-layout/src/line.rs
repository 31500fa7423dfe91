//! Greedy line partitioning shared by the measure and arrange passes.

use std::ops::Range;

use flexpanel_core::{greater_than, FlexWrap, MainAxis, UvSize};

/// A run of consecutive ordered items sharing one cross-axis band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Sum of the items' main-axis extents
    pub items_u: f64,
    /// Largest cross-axis extent among the items
    pub line_v: f64,
    /// First ordered position in the line
    pub start: usize,
    /// One past the last ordered position
    pub end: usize,
}

impl Line {
    fn empty(at: usize) -> Self {
        Self {
            items_u: 0.0,
            line_v: 0.0,
            start: at,
            end: at,
        }
    }

    fn single(at: usize, size: UvSize) -> Self {
        Self {
            items_u: size.u,
            line_v: size.v,
            start: at,
            end: at + 1,
        }
    }

    fn push(&mut self, size: UvSize) {
        self.items_u += size.u;
        self.line_v = self.line_v.max(size.v);
        self.end += 1;
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Ordered positions covered by this line.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split ordered item sizes into lines no longer than `limit_u`.
///
/// Without wrapping everything lands on one line. With wrapping, items are
/// packed greedily while the running extent stays within `limit_u`. On
/// overflow the current line is closed, even when it holds nothing yet. An
/// item that alone exceeds the limit is isolated on its own closed line and
/// packing resumes on a fresh, possibly empty, line. The trailing line is
/// always kept, so an empty panel has exactly one empty line.
///
/// Empty lines have no extent; they only count towards the cross-axis
/// distribution of `align-content`.
pub(crate) fn partition(sizes: &[UvSize], wrap: FlexWrap, limit_u: f64) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::empty(0);

    for (index, &size) in sizes.iter().enumerate() {
        if wrap == FlexWrap::NoWrap || !greater_than(current.items_u + size.u, limit_u) {
            current.push(size);
            continue;
        }

        lines.push(current);
        if greater_than(size.u, limit_u) {
            lines.push(Line::single(index, size));
            current = Line::empty(index + 1);
        } else {
            current = Line::single(index, size);
        }
    }

    lines.push(current);
    lines
}

/// Panel extent covering all lines: widest line by stacked line heights.
pub(crate) fn extent(axis: MainAxis, lines: &[Line]) -> UvSize {
    lines.iter().fold(UvSize::new(axis), |mut total, line| {
        total.u = total.u.max(line.items_u);
        total.v += line.line_v;
        total
    })
}
