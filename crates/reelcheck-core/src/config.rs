//! Session configuration: tunables, fish parameters and stat modifiers.
//!
//! All of these are resolved once when a session starts and never
//! re-queried while it runs.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Span;

/// Externally settable tuning values for the minigame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinigameTunables {
    pub hook_acceleration: f64,
    /// Base gravity; scaled by `Modifiers::hook_gravity`.
    pub hook_gravity: f64,
    pub hook_max_velocity: f64,
    pub bounce_factor: f64,
    /// Base catch rate; scaled by `Modifiers::catch_speed`.
    pub catch_rate: f64,
    /// Base escape rate; scaled by `Modifiers::fish_escape_rate`.
    pub escape_rate: f64,
    pub fish_max_velocity: f64,
    pub fish_min_move_distance: f64,
    pub fish_max_move_distance: f64,
    /// Catch area size in the same units as `track_length`; scaled by
    /// `Modifiers::catch_area`.
    pub catch_area_size: f64,
    pub track_length: f64,
    pub edge_offset: f64,
    /// Wriggle burst strength as a fraction of `fish_max_velocity`.
    pub wriggle_strength: f64,
    pub wriggle_interval: Span,
    pub state_duration: Span,
    pub forced_struggle_duration: Span,
    /// Hook position at session start, clamped into the hook's range.
    pub hook_start: f64,
    /// Fish position at session start.
    pub fish_start: f64,
}

impl Default for MinigameTunables {
    fn default() -> Self {
        Self {
            hook_acceleration: HOOK_ACCELERATION,
            hook_gravity: HOOK_GRAVITY,
            hook_max_velocity: HOOK_MAX_VELOCITY,
            bounce_factor: BOUNCE_FACTOR,
            catch_rate: CATCH_RATE,
            escape_rate: ESCAPE_RATE,
            fish_max_velocity: FISH_MAX_VELOCITY,
            fish_min_move_distance: FISH_MIN_MOVE_DISTANCE,
            fish_max_move_distance: FISH_MAX_MOVE_DISTANCE,
            catch_area_size: CATCH_AREA_SIZE,
            track_length: TRACK_LENGTH,
            edge_offset: EDGE_OFFSET,
            wriggle_strength: WRIGGLE_STRENGTH,
            wriggle_interval: Span::new(WRIGGLE_INTERVAL_MIN, WRIGGLE_INTERVAL_MAX),
            state_duration: Span::new(STATE_DURATION_MIN, STATE_DURATION_MAX),
            forced_struggle_duration: Span::new(
                FORCED_STRUGGLE_DURATION_MIN,
                FORCED_STRUGGLE_DURATION_MAX,
            ),
            hook_start: HOOK_START_POSITION,
            fish_start: FISH_START_POSITION,
        }
    }
}

impl MinigameTunables {
    /// Range the fish's per-entry travel cap is drawn from.
    pub fn move_distance(&self) -> Span {
        Span::new(self.fish_min_move_distance, self.fish_max_move_distance)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when any field violates its documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("hook_acceleration", self.hook_acceleration)?;
        check_non_negative("hook_gravity", self.hook_gravity)?;
        check_positive("hook_max_velocity", self.hook_max_velocity)?;
        check_unit("bounce_factor", self.bounce_factor)?;
        check_non_negative("catch_rate", self.catch_rate)?;
        check_non_negative("escape_rate", self.escape_rate)?;
        check_positive("fish_max_velocity", self.fish_max_velocity)?;
        check_non_negative("fish_min_move_distance", self.fish_min_move_distance)?;
        check_span("fish_move_distance", self.move_distance())?;
        check_positive("catch_area_size", self.catch_area_size)?;
        check_positive("track_length", self.track_length)?;
        check_finite("edge_offset", self.edge_offset)?;
        if !(0.0..0.5).contains(&self.edge_offset) {
            return Err(ConfigError::OutOfRange {
                field: "edge_offset",
                value: self.edge_offset,
                min: 0.0,
                max: 0.5,
            });
        }
        check_non_negative("wriggle_strength", self.wriggle_strength)?;
        check_span("wriggle_interval", self.wriggle_interval)?;
        check_positive("wriggle_interval.min", self.wriggle_interval.min)?;
        check_span("state_duration", self.state_duration)?;
        check_non_negative("state_duration.min", self.state_duration.min)?;
        check_span("forced_struggle_duration", self.forced_struggle_duration)?;
        check_non_negative(
            "forced_struggle_duration.min",
            self.forced_struggle_duration.min,
        )?;
        check_unit("hook_start", self.hook_start)?;
        check_unit("fish_start", self.fish_start)?;
        Ok(())
    }

    /// Half-width of the catch window in normalized track units.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CatchWindowTooLarge` when the hook would have no
    /// room to move, and a bounds error when the window is empty.
    pub fn half_catch_window(&self, modifiers: &Modifiers) -> Result<f64, ConfigError> {
        let area = self.catch_area_size * modifiers.catch_area;
        let half_window = (area / self.track_length) / 2.0;
        check_positive("half_catch_window", half_window)?;
        if half_window + self.edge_offset >= 0.5 {
            return Err(ConfigError::CatchWindowTooLarge { half_window });
        }
        Ok(half_window)
    }

    /// Range the hook's position is clamped to for a given catch window.
    pub fn hook_span(&self, half_window: f64) -> Span {
        let inset = half_window + self.edge_offset;
        Span::new(TRACK_MIN + inset, TRACK_MAX - inset)
    }
}

/// Parameters of one fish type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishParams {
    pub id: String,
    /// Acceleration while moving Up/Down.
    pub speed: f64,
    /// Feints and sudden movements.
    pub jumpiness: f64,
    /// How long the fish sticks with a state.
    pub stubbornness: f64,
    /// Larger fish lose momentum more slowly.
    pub size: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Number of fish landed on a catch, drawn inclusively.
    pub min_amount: u32,
    pub max_amount: u32,
}

impl Default for FishParams {
    fn default() -> Self {
        Self {
            id: DEFAULT_FISH_ID.to_string(),
            speed: 1.0,
            jumpiness: 1.0,
            stubbornness: 1.0,
            size: 1.0,
            min_weight: 1.0,
            max_weight: 2.0,
            min_amount: 1,
            max_amount: 1,
        }
    }
}

impl FishParams {
    pub fn weight_span(&self) -> Span {
        Span::new(self.min_weight, self.max_weight)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when the fish has no usable speed, a negative
    /// stat, or an inverted weight/amount range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("fish.speed", self.speed)?;
        check_non_negative("fish.jumpiness", self.jumpiness)?;
        check_non_negative("fish.stubbornness", self.stubbornness)?;
        check_non_negative("fish.size", self.size)?;
        check_non_negative("fish.min_weight", self.min_weight)?;
        check_span("fish.weight", self.weight_span())?;
        if self.min_amount == 0 || self.min_amount > self.max_amount {
            return Err(ConfigError::InvalidAmount {
                min: self.min_amount,
                max: self.max_amount,
            });
        }
        Ok(())
    }
}

/// Player stat multipliers supplied by the stats collaborator.
/// 1.0 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub catch_speed: f64,
    pub catch_area: f64,
    pub hook_gravity: f64,
    pub fish_escape_rate: f64,
    pub fish_weight: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            catch_speed: 1.0,
            catch_area: 1.0,
            hook_gravity: 1.0,
            fish_escape_rate: 1.0,
            fish_weight: 1.0,
        }
    }
}

impl Modifiers {
    /// # Errors
    ///
    /// Returns `ConfigError` for a non-positive catch area or any negative or
    /// non-finite multiplier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("modifiers.catch_speed", self.catch_speed)?;
        check_positive("modifiers.catch_area", self.catch_area)?;
        check_non_negative("modifiers.hook_gravity", self.hook_gravity)?;
        check_non_negative("modifiers.fish_escape_rate", self.fish_escape_rate)?;
        check_non_negative("modifiers.fish_weight", self.fish_weight)?;
        Ok(())
    }
}

/// Session-wide multipliers on the fish's own stats. 1.0 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishMultipliers {
    pub jumpiness: f64,
    pub speed: f64,
    pub stubbornness: f64,
    pub size: f64,
}

impl Default for FishMultipliers {
    fn default() -> Self {
        Self {
            jumpiness: 1.0,
            speed: 1.0,
            stubbornness: 1.0,
            size: 1.0,
        }
    }
}

impl FishMultipliers {
    /// # Errors
    ///
    /// Returns `ConfigError` for a non-positive speed or any negative or
    /// non-finite multiplier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("multipliers.jumpiness", self.jumpiness)?;
        check_positive("multipliers.speed", self.speed)?;
        check_non_negative("multipliers.stubbornness", self.stubbornness)?;
        check_non_negative("multipliers.size", self.size)?;
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn check_span(field: &'static str, span: Span) -> Result<(), ConfigError> {
    check_finite(field, span.min)?;
    check_finite(field, span.max)?;
    if span.min > span.max {
        return Err(ConfigError::InvertedRange {
            field,
            min: span.min,
            max: span.max,
        });
    }
    Ok(())
}
