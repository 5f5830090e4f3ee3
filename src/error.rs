//! Error types for scenario construction
//!
//! Everything the core consumes is either the built-in configuration or a
//! scenario file, so errors only arise while turning configuration into
//! runtime state. The integrator itself has no recoverable failures.

use thiserror::Error;

/// Result type for scenario construction
pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("body `{name}` has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body `{name}` has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f64 },

    #[error("body `{name}`: `{field}` needs 2 components, got {len}")]
    BadVector {
        name: String,
        field: &'static str,
        len: usize,
    },

    #[error("scenario has no bodies")]
    EmptyBodySet,

    #[error("invalid timeline rule: {0}")]
    InvalidTimeline(String),

    #[error("invalid view settings: {0}")]
    InvalidView(String),
}
