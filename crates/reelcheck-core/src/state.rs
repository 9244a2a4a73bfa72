//! Minigame state snapshot returned to the caller after each step.

use serde::{Deserialize, Serialize};

use crate::enums::{FishState, SessionPhase};

/// Complete visible state of a session after a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinigameSnapshot {
    pub phase: SessionPhase,
    /// Steps taken in the current session.
    pub step: u64,
    /// Simulated seconds elapsed in the current session.
    pub elapsed_secs: f64,
    pub fish_position: f64,
    pub fish_velocity: f64,
    pub fish_state: FishState,
    pub hook_position: f64,
    pub hook_velocity: f64,
    /// Half-width of the catch window around the hook.
    pub half_catch_window: f64,
    pub is_catching: bool,
    /// Catch progress in `[-1, 1]`.
    pub progress: f64,
}

impl MinigameSnapshot {
    /// Progress remapped from `[-1, 1]` to `[0, 1]` for a progress bar.
    pub fn success_fraction(&self) -> f64 {
        ((self.progress + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}
