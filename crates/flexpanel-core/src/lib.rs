//! Core types for the flexpanel layout engine.
//!
//! This crate provides the foundational types shared by the layout passes:
//! - Geometry values (`Size`, `Rect`) and tolerant float comparison
//! - The axis model mapping main/cross (U/V) coordinates onto width/height
//! - Panel and item style types, with keyword and declaration parsing
//! - Error types

pub mod axis;
pub mod errors;
pub mod style;
pub mod types;

pub use axis::*;
pub use errors::*;
pub use style::*;
pub use types::*;
