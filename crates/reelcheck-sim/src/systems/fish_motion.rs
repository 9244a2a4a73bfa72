//! Fish motion controller.
//!
//! Drives the fish through the state machine from `reelcheck-fish-ai` and
//! integrates its position. Up/Down accelerate at the fish's speed unless the
//! fish is pinned against the boundary it is heading for; Struggling decays
//! velocity toward zero and fires wriggle bursts on a random interval.

use rand::Rng;

use reelcheck_core::config::MinigameTunables;
use reelcheck_core::constants::{TRACK_MAX, TRACK_MIN};
use reelcheck_core::enums::FishState;
use reelcheck_core::types::{Marker, Span};

use reelcheck_fish_ai::fsm::{self, FishContext, StateEntry};
use reelcheck_fish_ai::profiles::FishBehaviorProfile;

use super::kinematics::{move_towards, Boundary, Kinematics};

#[derive(Debug, Clone)]
pub struct FishMotionController {
    marker: Marker,
    kinematics: Kinematics,
    profile: FishBehaviorProfile,
    tunables: MinigameTunables,
    state: FishState,
    time_in_state: f64,
    /// Zero at session start so the first step picks a state.
    state_duration: f64,
    state_start_position: f64,
    max_move_distance: f64,
    /// Seconds until the next wriggle burst.
    wriggle_timer: f64,
}

impl FishMotionController {
    /// Place the fish at rest in `Struggling` and draw the first wriggle
    /// interval.
    pub fn new<R: Rng>(
        profile: FishBehaviorProfile,
        tunables: &MinigameTunables,
        rng: &mut R,
    ) -> Self {
        let position = tunables.fish_start.clamp(TRACK_MIN, TRACK_MAX);
        Self {
            marker: Marker::at_rest(position),
            kinematics: Kinematics {
                bounds: Span::new(TRACK_MIN, TRACK_MAX),
                max_velocity: tunables.fish_max_velocity,
                bounce_factor: tunables.bounce_factor,
            },
            profile,
            tunables: tunables.clone(),
            state: FishState::Struggling,
            time_in_state: 0.0,
            state_duration: 0.0,
            state_start_position: position,
            max_move_distance: 0.0,
            wriggle_timer: fsm::draw_wriggle_interval(tunables, rng),
        }
    }

    /// Advance state and position by `dt`. Terminal fish do not move.
    pub fn step<R: Rng>(&mut self, dt: f64, rng: &mut R) -> Option<Boundary> {
        if self.state.is_terminal() {
            return None;
        }

        self.time_in_state += dt;
        if let Some(entry) =
            fsm::evaluate_transition(&self.context(), &self.profile, &self.tunables, rng)
        {
            self.enter(entry);
        }
        if let Some(entry) =
            fsm::evaluate_travel_cap(&self.context(), &self.profile, &self.tunables, rng)
        {
            self.enter(entry);
        }

        self.apply_state_forces(dt, rng);
        self.kinematics.integrate(&mut self.marker, dt)
    }

    /// Enter `state` immediately with freshly drawn budgets.
    pub fn force_state<R: Rng>(&mut self, state: FishState, rng: &mut R) {
        let entry = fsm::enter_state(state, &self.profile, &self.tunables, rng);
        self.enter(entry);
    }

    /// Freeze the fish in a terminal state.
    pub fn finish(&mut self, state: FishState) {
        debug_assert!(state.is_terminal());
        log::debug!("Fish {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn state(&self) -> FishState {
        self.state
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn position(&self) -> f64 {
        self.marker.position
    }

    pub fn velocity(&self) -> f64 {
        self.marker.velocity
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    pub fn profile(&self) -> &FishBehaviorProfile {
        &self.profile
    }

    /// Distance covered since the current state was entered.
    pub fn distance_traveled(&self) -> f64 {
        (self.marker.position - self.state_start_position).abs()
    }

    /// Travel cap drawn for the current Up/Down state.
    pub fn max_move_distance(&self) -> f64 {
        self.max_move_distance
    }

    pub fn state_duration(&self) -> f64 {
        self.state_duration
    }

    pub fn time_in_state(&self) -> f64 {
        self.time_in_state
    }

    fn context(&self) -> FishContext {
        FishContext {
            state: self.state,
            position: self.marker.position,
            time_in_state: self.time_in_state,
            state_duration: self.state_duration,
            distance_traveled: self.distance_traveled(),
            max_move_distance: self.max_move_distance,
        }
    }

    fn enter(&mut self, entry: StateEntry) {
        log::debug!(
            "Fish {:?} -> {:?} at {:.3} (budget {:.2}s, cap {:.3}{})",
            self.state,
            entry.state,
            self.marker.position,
            entry.duration,
            entry.max_move_distance,
            if entry.forced { ", travel cap hit" } else { "" }
        );
        self.state = entry.state;
        self.time_in_state = 0.0;
        self.state_duration = entry.duration;
        self.state_start_position = self.marker.position;
        self.max_move_distance = entry.max_move_distance;
    }

    fn apply_state_forces<R: Rng>(&mut self, dt: f64, rng: &mut R) {
        match self.state {
            FishState::Up => {
                if !self.kinematics.pinned_top(&self.marker) {
                    self.marker.velocity += self.profile.speed * dt;
                }
            }
            FishState::Down => {
                if !self.kinematics.pinned_bottom(&self.marker) {
                    self.marker.velocity -= self.profile.speed * dt;
                }
            }
            FishState::Struggling => {
                let deceleration = self.profile.struggle_deceleration();
                self.marker.velocity =
                    move_towards(self.marker.velocity, 0.0, deceleration * dt);

                self.wriggle_timer -= dt;
                if self.wriggle_timer <= 0.0 {
                    let impulse = fsm::wriggle_impulse(&self.profile, &self.tunables, rng);
                    log::trace!("Wriggle burst {impulse:+.3}");
                    self.marker.velocity += impulse;
                    self.wriggle_timer = fsm::draw_wriggle_interval(&self.tunables, rng);
                }
            }
            FishState::Caught | FishState::Escaped => {}
        }
    }
}
