//! Main/cross axis model.
//!
//! Layout arithmetic is written once in terms of `u` (main axis) and `v`
//! (cross axis). `MainAxis` maps those onto width/height, and
//! `FlexDirection` splits into an axis plus a reversal flag, so the rest of
//! the engine never branches on the four directions.

use glam::DVec2;

use crate::style::FlexDirection;
use crate::types::{Rect, Size};

/// Which concrete dimension the main axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MainAxis {
    /// `u` = width, `v` = height
    #[default]
    Horizontal,
    /// `u` = height, `v` = width
    Vertical,
}

impl FlexDirection {
    pub fn main_axis(self) -> MainAxis {
        match self {
            FlexDirection::Row | FlexDirection::RowReverse => MainAxis::Horizontal,
            FlexDirection::Column | FlexDirection::ColumnReverse => MainAxis::Vertical,
        }
    }

    /// Items run from the main-axis end towards the start.
    pub fn is_reversed(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

impl MainAxis {
    pub fn is_horizontal(self) -> bool {
        self == MainAxis::Horizontal
    }

    /// Map a `(u, v)` vector to `(x, y)` or back; the mapping is its own
    /// inverse.
    pub fn project(self, point: DVec2) -> DVec2 {
        match self {
            MainAxis::Horizontal => point,
            MainAxis::Vertical => DVec2::new(point.y, point.x),
        }
    }

    /// Project a main/cross placement onto a concrete rect.
    pub fn rect(self, u: f64, v: f64, size_u: f64, size_v: f64) -> Rect {
        Rect::from_vecs(
            self.project(DVec2::new(u, v)),
            self.project(DVec2::new(size_u, size_v)),
        )
    }

    /// Scale only the main-axis dimension of `size`.
    pub fn scale_main(self, size: Size, scale: f64) -> Size {
        match self {
            MainAxis::Horizontal => Size::new(size.width * scale, size.height),
            MainAxis::Vertical => Size::new(size.width, size.height * scale),
        }
    }
}

/// A size expressed in main (`u`) and cross (`v`) extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UvSize {
    pub u: f64,
    pub v: f64,
    axis: MainAxis,
}

impl UvSize {
    /// Zero extent on both axes.
    pub fn new(axis: MainAxis) -> Self {
        Self { u: 0.0, v: 0.0, axis }
    }

    pub fn from_uv(axis: MainAxis, u: f64, v: f64) -> Self {
        Self { u, v, axis }
    }

    pub fn from_size(axis: MainAxis, size: Size) -> Self {
        let uv = axis.project(size.to_vec());
        Self::from_uv(axis, uv.x, uv.y)
    }

    pub fn axis(&self) -> MainAxis {
        self.axis
    }

    pub fn width(&self) -> f64 {
        match self.axis {
            MainAxis::Horizontal => self.u,
            MainAxis::Vertical => self.v,
        }
    }

    pub fn height(&self) -> f64 {
        match self.axis {
            MainAxis::Horizontal => self.v,
            MainAxis::Vertical => self.u,
        }
    }

    pub fn set_width(&mut self, width: f64) {
        match self.axis {
            MainAxis::Horizontal => self.u = width,
            MainAxis::Vertical => self.v = width,
        }
    }

    pub fn set_height(&mut self, height: f64) {
        match self.axis {
            MainAxis::Horizontal => self.v = height,
            MainAxis::Vertical => self.u = height,
        }
    }

    pub fn to_size(&self) -> Size {
        Size::from_vec(self.axis.project(DVec2::new(self.u, self.v)))
    }
}
