//! Error types for the flexpanel engine.

use thiserror::Error;

/// Top-level error type for the flexpanel engine.
#[derive(Debug, Error)]
pub enum FlexError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors while building or parsing panel and item styles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    #[error("Unknown value '{value}' for {property}")]
    UnknownKeyword { property: &'static str, value: String },

    #[error("Unknown style property: {name}")]
    UnknownProperty { name: String },

    #[error("Malformed declaration '{declaration}': expected 'name: value'")]
    MalformedDeclaration { declaration: String },

    #[error("Invalid {name} factor {value}: must be finite and non-negative")]
    InvalidFactor { name: &'static str, value: f64 },

    #[error("Invalid flex-basis {value}: must be finite and non-negative")]
    InvalidBasis { value: f64 },

    #[error("Invalid number '{value}' for {property}")]
    InvalidNumber { property: &'static str, value: String },
}

/// Errors during the arrange pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout cycle is stale: measured {expected} items, arranging {found}")]
    StaleCycle { expected: usize, found: usize },

    #[error("Layout cycle is stale: ordered position {position} refers to vacant slot {slot}")]
    OrderMismatch { position: usize, slot: usize },
}
