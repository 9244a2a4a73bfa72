//! Error types for configuration and invalid calls.
//!
//! Reaching a track boundary or a progress extreme is never an error; those
//! are reported as state and events.

use thiserror::Error;

/// Raised when tunables, fish parameters, modifiers or a catalog violate
/// their documented bounds.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("fish amount range is invalid: min {min}, max {max} (min must be at least 1)")]
    InvalidAmount { min: u32, max: u32 },
    #[error("catch window half-size {half_window} leaves no room for the hook on the track")]
    CatchWindowTooLarge { half_window: f64 },
    #[error("unknown fish id `{0}`")]
    UnknownFish(String),
    #[error("fish catalog is malformed: {0}")]
    Catalog(String),
}

/// Raised by the orchestrator when it is called in a way the frame loop
/// should never produce.
#[derive(Debug, Error, PartialEq)]
pub enum MinigameError {
    #[error("no minigame session has been started")]
    NotStarted,
    #[error("a minigame session is already running")]
    SessionActive,
    #[error("step delta must be finite and non-negative, got {0}")]
    InvalidDelta(f64),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
