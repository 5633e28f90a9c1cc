//! Error types for field construction and listener registration
//!
//! The per-frame path never fails; only building a field from a bad
//! config or wiring up pointer input can.

use thiserror::Error;

/// Rejected construction constants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("point count must be at least 1")]
    NoPoints,

    /// A length that must be strictly positive and finite.
    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f32 },

    /// A factor that must be non-negative and finite.
    #[error("{name} must be non-negative and finite (got {value})")]
    Negative { name: &'static str, value: f32 },

    /// A value with no sign constraint that must still be finite.
    #[error("{name} must be finite (got {value})")]
    NotFinite { name: &'static str, value: f32 },

    /// A blend factor that must lie in [0, 1].
    #[error("{name} must be in [0, 1] (got {value})")]
    Fraction { name: &'static str, value: f32 },

    #[error("damping must be in (0, 1] (got {0})")]
    Damping(f32),
}

/// Pointer listener could not be (de)registered with the host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListenerError {
    #[error("host rejected pointer listener: {0}")]
    Host(String),
}
