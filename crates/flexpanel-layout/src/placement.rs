//! Placement of the items of one line.

use std::ops::Range;

use flexpanel_core::{AlignItems, FlexConfig, JustifyContent, Size, UvSize};
use smallvec::SmallVec;
use tracing::trace;

use crate::item::{FlexChild, FlexItem};

/// Inputs for placing a single line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LineInfo {
    /// Sum of the natural main-axis extents of the line's items
    pub items_u: f64,
    /// Cross-axis offset of the line within the panel
    pub offset_v: f64,
    /// Cross-axis extent of the line
    pub line_v: f64,
    /// Extra cross-axis extent given to stretched items
    pub fill_v: f64,
    /// Main-axis capacity of the line
    pub capacity_u: f64,
    /// Uniform main-axis scale applied to item sizes and the start offset
    pub scale_u: f64,
    /// Ordered positions covered by the line
    pub range: Range<usize>,
}

/// Commit the final rect of every item in `info.range`.
pub(crate) fn place_line<I: FlexItem>(
    config: &FlexConfig,
    info: &LineInfo,
    order: &[usize],
    natural: &[Size],
    children: &mut [Option<FlexChild<I>>],
) {
    let axis = config.direction.main_axis();
    let reversed = config.direction.is_reversed();
    let count = info.range.len();
    let free_u = info.capacity_u - info.items_u;

    let start = if reversed {
        match config.justify_content {
            JustifyContent::FlexStart
            | JustifyContent::SpaceBetween
            | JustifyContent::SpaceAround => info.capacity_u,
            JustifyContent::FlexEnd => info.items_u,
            JustifyContent::Center => (info.capacity_u + info.items_u) * 0.5,
        }
    } else {
        match config.justify_content {
            JustifyContent::FlexEnd => free_u,
            JustifyContent::Center => free_u * 0.5,
            JustifyContent::FlexStart
            | JustifyContent::SpaceBetween
            | JustifyContent::SpaceAround => 0.0,
        }
    };
    let mut u = start * info.scale_u;

    // Gap placed before each item.
    let mut gaps: SmallVec<[f64; 16]> = SmallVec::from_elem(0.0, count);
    match config.justify_content {
        JustifyContent::SpaceBetween if count > 1 => {
            let gap = free_u / (count - 1) as f64;
            for slot in gaps.iter_mut().skip(1) {
                *slot = gap;
            }
        }
        JustifyContent::SpaceAround if count > 0 => {
            let half = free_u / count as f64 * 0.5;
            gaps[0] = half;
            for slot in gaps.iter_mut().skip(1) {
                *slot = half * 2.0;
            }
        }
        _ => {}
    }

    trace!(
        items = count,
        start = u,
        offset_v = info.offset_v,
        line_v = info.line_v,
        "placing flex line"
    );

    for (gap, position) in gaps.iter().zip(info.range.clone()) {
        let Some(child) = children[order[position]].as_mut() else {
            continue;
        };

        let size = UvSize::from_size(axis, axis.scale_main(natural[position], info.scale_u));

        if reversed {
            u -= size.u + gap;
        } else {
            u += gap;
        }

        let mut v = info.offset_v;
        let mut size_v = size.v;
        match child.style.align_self.resolve(config.align_items) {
            AlignItems::Stretch => size_v = info.line_v + info.fill_v,
            AlignItems::FlexEnd => v += info.line_v - size_v,
            AlignItems::Center => v += (info.line_v - size_v) * 0.5,
            AlignItems::FlexStart => {}
        }

        child.item.commit_rect(axis.rect(u, v, size.u, size_v));

        if !reversed {
            u += size.u;
        }
    }
}
