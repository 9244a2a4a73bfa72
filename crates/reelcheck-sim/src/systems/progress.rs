//! Catch progress tracker.
//!
//! Each step checks whether the fish is inside the catch window around the
//! hook and moves progress toward +1 (catching) or -1 (escaping). Reaching
//! either end is terminal: progress never changes again.

use reelcheck_core::config::{MinigameTunables, Modifiers};
use reelcheck_core::constants::{PROGRESS_CAUGHT, PROGRESS_ESCAPED};
use reelcheck_core::enums::Outcome;

#[derive(Debug, Clone)]
pub struct CatchProgressTracker {
    progress: f64,
    half_window: f64,
    /// Catch rate after the catch-speed modifier.
    catch_rate: f64,
    /// Escape rate after the escape-rate modifier.
    escape_rate: f64,
    is_catching: bool,
    outcome: Option<Outcome>,
}

impl CatchProgressTracker {
    pub fn new(tunables: &MinigameTunables, modifiers: &Modifiers, half_window: f64) -> Self {
        Self {
            progress: 0.0,
            half_window,
            catch_rate: tunables.catch_rate * modifiers.catch_speed,
            escape_rate: tunables.escape_rate * modifiers.fish_escape_rate,
            is_catching: false,
            outcome: None,
        }
    }

    /// Whether `fish` lies inside the catch window centered on `hook`.
    pub fn in_window(&self, fish: f64, hook: f64) -> bool {
        (fish - hook).abs() <= self.half_window
    }

    /// Accumulate one step of progress. Returns the outcome on the step it is
    /// reached, and `None` on every other step including all later ones.
    pub fn update(&mut self, fish: f64, hook: f64, dt: f64) -> Option<Outcome> {
        if self.outcome.is_some() {
            return None;
        }

        self.is_catching = self.in_window(fish, hook);
        if self.is_catching {
            self.progress += self.catch_rate * dt;
        } else {
            self.progress -= self.escape_rate * dt;
        }
        self.progress = self.progress.clamp(PROGRESS_ESCAPED, PROGRESS_CAUGHT);

        if self.progress >= PROGRESS_CAUGHT {
            self.outcome = Some(Outcome::Caught);
        } else if self.progress <= PROGRESS_ESCAPED {
            self.outcome = Some(Outcome::Escaped);
        }
        self.outcome
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_catching(&self) -> bool {
        self.is_catching
    }

    pub fn half_window(&self) -> f64 {
        self.half_window
    }

    pub fn catch_rate(&self) -> f64 {
        self.catch_rate
    }

    pub fn escape_rate(&self) -> f64 {
        self.escape_rate
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}
