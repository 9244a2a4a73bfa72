//! Fundamental value types.

use serde::{Deserialize, Serialize};

/// A closed numeric interval `[min, max]` that random draws are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Finite bounds with `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Both bounds multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Span {
        Span::new(self.min * factor, self.max * factor)
    }

    /// Clamp `value` into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Position and velocity of one marker on the track.
///
/// Position is normalized to `[0, 1]`; velocity is in track units per second,
/// positive toward the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: f64,
    pub velocity: f64,
}

impl Marker {
    pub fn at_rest(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }
}

/// A fish handed to the inventory collaborator on a successful catch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaughtItem {
    /// Fish type identifier.
    pub fish_id: String,
    /// Weight after the fish-weight modifier.
    pub weight: f64,
    /// Where the fish was caught.
    pub origin_id: String,
}
