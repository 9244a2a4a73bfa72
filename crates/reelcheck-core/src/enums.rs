//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Behavior state of the fish marker.
///
/// `Caught` and `Escaped` are terminal: once entered, neither motion nor
/// progress updates happen again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishState {
    /// Accelerating toward the top of the track.
    Up,
    /// Accelerating toward the bottom of the track.
    Down,
    /// Drifting to a stop with intermittent wriggle bursts.
    #[default]
    Struggling,
    /// Progress reached +1.
    Caught,
    /// Progress reached -1.
    Escaped,
}

impl FishState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FishState::Caught | FishState::Escaped)
    }

    /// Whether this is a directed-movement state subject to the travel cap.
    pub fn is_directional(&self) -> bool {
        matches!(self, FishState::Up | FishState::Down)
    }
}

/// Lifecycle phase of a minigame session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No session started yet.
    #[default]
    Idle,
    /// Stepping.
    Active,
    /// Ended successfully.
    Caught,
    /// Ended unsuccessfully.
    Escaped,
    /// Force-terminated by the caller; no outcome event was emitted.
    Cancelled,
}

impl SessionPhase {
    /// Whether the session has ended (for any reason).
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            SessionPhase::Caught | SessionPhase::Escaped | SessionPhase::Cancelled
        )
    }
}

/// Terminal result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Caught,
    Escaped,
    Cancelled,
}

impl From<Outcome> for SessionPhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Caught => SessionPhase::Caught,
            Outcome::Escaped => SessionPhase::Escaped,
            Outcome::Cancelled => SessionPhase::Cancelled,
        }
    }
}
