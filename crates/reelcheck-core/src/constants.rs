//! Simulation constants and tuning defaults.
//!
//! Every value here is only a default: the orchestrator reads the live values
//! from `MinigameTunables`, which callers may override per session.

/// Reference step rate (Hz) used by tools and tests that drive a fixed step.
pub const TICK_RATE: u32 = 60;

/// Seconds per reference step.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Track ---

/// Lower physical boundary of the track.
pub const TRACK_MIN: f64 = 0.0;

/// Upper physical boundary of the track.
pub const TRACK_MAX: f64 = 1.0;

/// Length of the track in the same units as `CATCH_AREA_SIZE`.
pub const TRACK_LENGTH: f64 = 800.0;

/// Inward nudge applied to the hook's clamp range so the drawn marker never
/// overhangs the track ends.
pub const EDGE_OFFSET: f64 = 0.01;

/// Fraction of pre-impact speed kept after hitting a boundary.
/// 0 = stop dead, 1 = perfectly elastic.
pub const BOUNCE_FACTOR: f64 = 0.5;

// --- Hook ---

/// Upward acceleration while reeling (track units / s²).
pub const HOOK_ACCELERATION: f64 = 1.0;

/// Downward acceleration while not reeling, before the hook-gravity modifier.
pub const HOOK_GRAVITY: f64 = 0.5;

/// Hook speed cap (track units / s).
pub const HOOK_MAX_VELOCITY: f64 = 2.0;

/// Hook position at session start; rests on the bottom of its range.
pub const HOOK_START_POSITION: f64 = 0.0;

// --- Catching ---

/// Size of the catch area, in track-length units.
pub const CATCH_AREA_SIZE: f64 = 200.0;

/// Progress gained per second while the fish is inside the catch window.
pub const CATCH_RATE: f64 = 0.1;

/// Progress lost per second while the fish is outside the catch window.
pub const ESCAPE_RATE: f64 = 0.2;

/// Progress value at which the fish is caught.
pub const PROGRESS_CAUGHT: f64 = 1.0;

/// Progress value at which the fish escapes.
pub const PROGRESS_ESCAPED: f64 = -1.0;

// --- Fish motion ---

/// Fish speed cap (track units / s).
pub const FISH_MAX_VELOCITY: f64 = 1.5;

/// Lower bound of the per-entry travel cap for Up/Down.
pub const FISH_MIN_MOVE_DISTANCE: f64 = 0.05;

/// Upper bound of the per-entry travel cap for Up/Down.
pub const FISH_MAX_MOVE_DISTANCE: f64 = 0.4;

/// Wriggle burst strength as a fraction of `FISH_MAX_VELOCITY`.
pub const WRIGGLE_STRENGTH: f64 = 0.7;

/// Range (s) the interval between wriggle bursts is drawn from.
pub const WRIGGLE_INTERVAL_MIN: f64 = 0.15;
pub const WRIGGLE_INTERVAL_MAX: f64 = 0.5;

/// Base state duration range (s), scaled by `1 + stubbornness`.
pub const STATE_DURATION_MIN: f64 = 1.0;
pub const STATE_DURATION_MAX: f64 = 3.0;

/// Shorter struggle duration range (s) used when a travel cap forces the exit.
pub const FORCED_STRUGGLE_DURATION_MIN: f64 = 0.5;
pub const FORCED_STRUGGLE_DURATION_MAX: f64 = 1.5;

/// Selection weight of `Struggling`; Up/Down weights vary with position.
pub const STRUGGLE_WEIGHT: f64 = 1.0;

/// Fish position at session start.
pub const FISH_START_POSITION: f64 = 0.5;

// --- Encounter ---

/// Seconds a fish waits near the player before leaving on its own.
pub const ENCOUNTER_TIME_UNTIL_LEAVING: f64 = 20.0;

/// Failed minigames allowed before the fish leaves.
pub const ENCOUNTER_FAILS_BEFORE_ESCAPE: u32 = 2;

// --- Catalog ---

/// Identifier of the fallback fish used when a catalog cannot supply one.
pub const DEFAULT_FISH_ID: &str = "default_fish";

/// Origin recorded on caught items when no catalog names one.
pub const UNKNOWN_ORIGIN: &str = "Unknown Environment";
