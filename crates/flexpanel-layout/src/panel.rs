//! Panel front end owning the configuration for a sequence of layout cycles.

use flexpanel_core::{FlexConfig, LayoutError, Size};

use crate::arrange::arrange;
use crate::item::{FlexChild, FlexItem};
use crate::measure::{measure, LayoutCycle};

/// A flex container.
///
/// Holds only configuration; per-cycle state lives in the [`LayoutCycle`]
/// returned by [`measure`](Self::measure).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlexPanel {
    pub config: FlexConfig,
}

/// Result of a complete measure + arrange cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    /// Size requested by the measure pass
    pub desired: Size,
    /// Size the items were arranged in
    pub arranged: Size,
    /// Lines produced by the measure pass
    pub line_count: usize,
}

impl FlexPanel {
    pub fn new(config: FlexConfig) -> Self {
        Self { config }
    }

    pub fn measure<I: FlexItem>(
        &self,
        children: &mut [Option<FlexChild<I>>],
        constraint: Size,
    ) -> LayoutCycle {
        measure(&self.config, children, constraint)
    }

    pub fn arrange<I: FlexItem>(
        &self,
        cycle: &LayoutCycle,
        children: &mut [Option<FlexChild<I>>],
        final_size: Size,
    ) -> Result<Size, LayoutError> {
        arrange(&self.config, cycle, children, final_size)
    }

    /// Run a full cycle in `available` space.
    ///
    /// Finite axes of `available` become the final size; infinite axes fall
    /// back to the desired size.
    pub fn layout<I: FlexItem>(
        &self,
        children: &mut [Option<FlexChild<I>>],
        available: Size,
    ) -> Result<LayoutOutcome, LayoutError> {
        let cycle = self.measure(children, available);
        let desired = cycle.desired_size();
        let final_size = Size::new(
            finite_or(available.width, desired.width),
            finite_or(available.height, desired.height),
        );
        let arranged = self.arrange(&cycle, children, final_size)?;

        Ok(LayoutOutcome {
            desired,
            arranged,
            line_count: cycle.line_count(),
        })
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
