//! Measure pass: display order, natural sizes, and desired panel size.

use flexpanel_core::{FlexConfig, Size, UvSize};
use tracing::debug;

use crate::item::{FlexChild, FlexItem};
use crate::line::{self, Line};

/// Everything the arrange pass needs from the measure pass of the same
/// layout cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCycle {
    constraint: UvSize,
    desired: Size,
    order: Vec<usize>,
    natural: Vec<Size>,
    lines: Vec<Line>,
}

impl LayoutCycle {
    /// Size the panel would like given the measure constraint.
    pub fn desired_size(&self) -> Size {
        self.desired
    }

    pub(crate) fn constraint_u(&self) -> f64 {
        self.constraint.u
    }

    /// Slot indices of the present items, in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Natural sizes, parallel to [`order`](Self::order).
    pub fn natural_sizes(&self) -> &[Size] {
        &self.natural
    }

    /// Line partition against the measure constraint.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines; 1 for an empty panel.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn item_count(&self) -> usize {
        self.order.len()
    }
}

/// Measure `children` against `constraint`.
///
/// Every item is offered the whole constraint, not the space left over by
/// its predecessors.
pub fn measure<I: FlexItem>(
    config: &FlexConfig,
    children: &mut [Option<FlexChild<I>>],
    constraint: Size,
) -> LayoutCycle {
    let axis = config.direction.main_axis();
    let constraint_uv = UvSize::from_size(axis, constraint);

    let order = display_order(children);

    let mut natural = Vec::with_capacity(order.len());
    for &slot in &order {
        if let Some(child) = children[slot].as_mut() {
            natural.push(child.item.measure_natural(constraint));
        }
    }

    let sizes: Vec<UvSize> = natural
        .iter()
        .map(|&size| UvSize::from_size(axis, size))
        .collect();
    let lines = line::partition(&sizes, config.wrap, constraint_uv.u);
    let desired = line::extent(axis, &lines).to_size();

    debug!(
        items = order.len(),
        lines = lines.len(),
        width = desired.width,
        height = desired.height,
        "measured flex panel"
    );

    LayoutCycle {
        constraint: constraint_uv,
        desired,
        order,
        natural,
        lines,
    }
}

/// Slot indices of present children, stably sorted by `order`.
fn display_order<I>(children: &[Option<FlexChild<I>>]) -> Vec<usize> {
    let mut keyed: Vec<(usize, i32)> = children
        .iter()
        .enumerate()
        .filter_map(|(slot, child)| child.as_ref().map(|c| (slot, c.style.order)))
        .collect();
    keyed.sort_by_key(|&(_, order)| order);
    keyed.into_iter().map(|(slot, _)| slot).collect()
}
