//! Geometry values used by the layout passes.

use glam::DVec2;

/// A width/height pair. Either dimension may be infinite when used as a
/// measurement constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Unbounded space on both axes.
    pub const INFINITE: Size = Size {
        width: f64::INFINITY,
        height: f64::INFINITY,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a size from a vector (x = width, y = height).
    pub fn from_vec(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Get the size as a vector.
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// True when either dimension is (tolerantly) zero.
    pub fn is_degenerate(&self) -> bool {
        is_zero(self.width) || is_zero(self.height)
    }
}

/// Axis-aligned rectangle in panel-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect with position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rect from position and size vectors.
    pub fn from_vecs(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Approximate equality using the layout tolerance.
    pub fn approx_eq(&self, other: &Rect) -> bool {
        are_close(self.x, other.x)
            && are_close(self.y, other.y)
            && are_close(self.width, other.width)
            && are_close(self.height, other.height)
    }
}

/// Relative tolerance for float comparisons, scaled by the operands.
const TOLERANCE: f64 = f64::EPSILON;

/// Tolerant equality: `a` and `b` differ by less than
/// `(|a| + |b| + 10) * EPSILON`.
pub fn are_close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let eps = (a.abs() + b.abs() + 10.0) * TOLERANCE;
    let delta = a - b;
    -eps < delta && eps > delta
}

/// `a > b` and not merely by rounding noise.
pub fn greater_than(a: f64, b: f64) -> bool {
    a > b && !are_close(a, b)
}

/// Absolute check against zero.
pub fn is_zero(value: f64) -> bool {
    value.abs() < 10.0 * TOLERANCE
}
