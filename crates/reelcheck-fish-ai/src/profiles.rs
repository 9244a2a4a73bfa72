//! Effective fish behavior profile.
//!
//! Consolidates a fish type's stats and the session's multipliers into the
//! numbers the state machine and motion integration consume.

use reelcheck_core::config::{FishMultipliers, FishParams};

/// Effective stats for one fish in one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishBehaviorProfile {
    /// Acceleration while moving Up/Down (track units / s²).
    pub speed: f64,
    pub jumpiness: f64,
    pub stubbornness: f64,
    pub size: f64,
}

impl FishBehaviorProfile {
    /// Rate at which a struggling fish's velocity decays toward zero.
    /// Larger fish decelerate more slowly.
    pub fn struggle_deceleration(&self) -> f64 {
        self.speed / (1.0 + self.size)
    }

    /// Multiplier applied to every drawn state duration.
    pub fn duration_scale(&self) -> f64 {
        1.0 + self.stubbornness
    }

    /// Largest wriggle impulse for the given speed cap and strength fraction.
    pub fn wriggle_strength(&self, max_velocity: f64, strength: f64) -> f64 {
        max_velocity * strength * self.jumpiness
    }
}

/// Get the behavior profile for a fish under the given multipliers.
pub fn get_profile(fish: &FishParams, multipliers: &FishMultipliers) -> FishBehaviorProfile {
    FishBehaviorProfile {
        speed: fish.speed * multipliers.speed,
        jumpiness: fish.jumpiness * multipliers.jumpiness,
        stubbornness: fish.stubbornness * multipliers.stubbornness,
        size: fish.size * multipliers.size,
    }
}
