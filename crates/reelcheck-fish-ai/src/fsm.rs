//! Fish behavior finite state machine.
//!
//! Pure functions that decide state changes for the fish: duration-based
//! weighted re-selection, the travel-cap exit from Up/Down, and the random
//! draws that come with entering a state. No simulation state is owned here.

use rand::Rng;

use reelcheck_core::config::MinigameTunables;
use reelcheck_core::constants::STRUGGLE_WEIGHT;
use reelcheck_core::enums::FishState;
use reelcheck_core::types::Span;

use crate::profiles::FishBehaviorProfile;

/// Input to the fish FSM for a single step.
#[derive(Debug, Clone, Copy)]
pub struct FishContext {
    pub state: FishState,
    /// Current normalized track position.
    pub position: f64,
    /// Seconds spent in the current state, this step included.
    pub time_in_state: f64,
    /// Duration budget drawn when the state was entered.
    pub state_duration: f64,
    /// Absolute distance covered since the state was entered.
    pub distance_traveled: f64,
    /// Travel cap drawn when the state was entered (Up/Down only).
    pub max_move_distance: f64,
}

/// A state to enter, with the budgets drawn for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateEntry {
    pub state: FishState,
    pub duration: f64,
    pub max_move_distance: f64,
    /// Entered because the travel cap was hit rather than the budget expiring.
    pub forced: bool,
}

/// Selection weights `(up, down, struggle)` at a track position.
///
/// The fish grows less likely to keep heading toward a boundary it is close
/// to.
pub fn state_weights(position: f64) -> (f64, f64, f64) {
    let position = position.clamp(0.0, 1.0);
    (1.0 - position, position, STRUGGLE_WEIGHT)
}

/// Map a draw in `[0, total_weight]` onto a state.
pub fn select_state(position: f64, roll: f64) -> FishState {
    let (up, down, _) = state_weights(position);
    if roll < up {
        FishState::Up
    } else if roll < up + down {
        FishState::Down
    } else {
        FishState::Struggling
    }
}

/// Weighted random state choice at `position`.
pub fn choose_state<R: Rng>(position: f64, rng: &mut R) -> FishState {
    let (up, down, struggle) = state_weights(position);
    let total = up + down + struggle;
    let roll = rng.gen_range(0.0..=total);
    select_state(position, roll)
}

/// Uniform draw from an inclusive span.
pub fn sample_span<R: Rng>(span: Span, rng: &mut R) -> f64 {
    if span.min >= span.max {
        return span.min;
    }
    rng.gen_range(span.min..=span.max)
}

/// Draw a duration budget from `span`, scaled by stubbornness.
pub fn draw_state_duration<R: Rng>(
    span: Span,
    profile: &FishBehaviorProfile,
    rng: &mut R,
) -> f64 {
    sample_span(span, rng) * profile.duration_scale()
}

/// Draw the seconds until the next wriggle burst.
pub fn draw_wriggle_interval<R: Rng>(tunables: &MinigameTunables, rng: &mut R) -> f64 {
    sample_span(tunables.wriggle_interval, rng)
}

/// Signed velocity impulse for one wriggle burst.
pub fn wriggle_impulse<R: Rng>(
    profile: &FishBehaviorProfile,
    tunables: &MinigameTunables,
    rng: &mut R,
) -> f64 {
    let strength = profile.wriggle_strength(tunables.fish_max_velocity, tunables.wriggle_strength);
    if strength <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-strength..=strength)
}

/// Full draw for entering `state` after its budget expired.
pub fn enter_state<R: Rng>(
    state: FishState,
    profile: &FishBehaviorProfile,
    tunables: &MinigameTunables,
    rng: &mut R,
) -> StateEntry {
    let duration = draw_state_duration(tunables.state_duration, profile, rng);
    let max_move_distance = sample_span(tunables.move_distance(), rng);
    StateEntry {
        state,
        duration,
        max_move_distance,
        forced: false,
    }
}

/// Evaluate the duration-based transition for one step.
///
/// Returns `None` while the budget holds, when the fish is terminal, or when
/// the weighted draw picks the state the fish is already in. In that last
/// case the running budget, start position and travel cap are kept.
pub fn evaluate_transition<R: Rng>(
    ctx: &FishContext,
    profile: &FishBehaviorProfile,
    tunables: &MinigameTunables,
    rng: &mut R,
) -> Option<StateEntry> {
    if ctx.state.is_terminal() || ctx.time_in_state < ctx.state_duration {
        return None;
    }

    let next = choose_state(ctx.position, rng);
    if next == ctx.state {
        return None;
    }
    Some(enter_state(next, profile, tunables, rng))
}

/// Evaluate the travel-cap exit for one step.
///
/// Up/Down that have covered their drawn distance are pushed into Struggling
/// with a shorter budget, regardless of the remaining duration.
pub fn evaluate_travel_cap<R: Rng>(
    ctx: &FishContext,
    profile: &FishBehaviorProfile,
    tunables: &MinigameTunables,
    rng: &mut R,
) -> Option<StateEntry> {
    if !ctx.state.is_directional() || ctx.distance_traveled < ctx.max_move_distance {
        return None;
    }

    Some(StateEntry {
        state: FishState::Struggling,
        duration: draw_state_duration(tunables.forced_struggle_duration, profile, rng),
        max_move_distance: 0.0,
        forced: true,
    })
}
