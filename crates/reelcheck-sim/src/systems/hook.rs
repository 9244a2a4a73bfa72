//! Hook controller: the player-driven marker.
//!
//! Reeling accelerates the hook upward; releasing lets the modifier-scaled
//! gravity pull it back down. The hook's range is inset by the catch window
//! half-size and the edge offset so the whole catch window stays on the
//! track.

use reelcheck_core::config::{MinigameTunables, Modifiers};
use reelcheck_core::types::Marker;

use super::kinematics::{Boundary, Kinematics};

#[derive(Debug, Clone)]
pub struct HookController {
    marker: Marker,
    kinematics: Kinematics,
    acceleration: f64,
    /// Gravity after the hook-gravity modifier.
    gravity: f64,
}

impl HookController {
    /// Place the hook at rest at the configured start, clamped into range.
    pub fn new(tunables: &MinigameTunables, modifiers: &Modifiers, half_window: f64) -> Self {
        let bounds = tunables.hook_span(half_window);
        Self {
            marker: Marker::at_rest(bounds.clamp(tunables.hook_start)),
            kinematics: Kinematics {
                bounds,
                max_velocity: tunables.hook_max_velocity,
                bounce_factor: tunables.bounce_factor,
            },
            acceleration: tunables.hook_acceleration,
            gravity: tunables.hook_gravity * modifiers.hook_gravity,
        }
    }

    /// Advance the hook by `dt` under the reel input.
    pub fn step(&mut self, dt: f64, reel_pressed: bool) -> Option<Boundary> {
        if reel_pressed {
            if !self.kinematics.pinned_top(&self.marker) {
                self.marker.velocity += self.acceleration * dt;
            }
        } else if !self.kinematics.pinned_bottom(&self.marker) {
            self.marker.velocity -= self.gravity * dt;
        }

        self.kinematics.integrate(&mut self.marker, dt)
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

    /// Gravity actually applied, after the modifier.
    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}
