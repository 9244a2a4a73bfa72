//! Kinematic integration with boundary bounce.
//!
//! Shared by the hook and the fish: velocity is clamped to the speed cap,
//! position advances by `velocity * dt`, and a marker that hits an end of its
//! range while moving into it is reflected with the bounce factor.

use reelcheck_core::types::{Marker, Span};

/// Which end of the range a marker was clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Bottom,
}

/// Parameters of one integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub bounds: Span,
    pub max_velocity: f64,
    /// Fraction of pre-impact speed kept after a boundary hit.
    pub bounce_factor: f64,
}

impl Kinematics {
    /// Advance `marker` by `dt`. Returns the boundary hit this step, if any.
    pub fn integrate(&self, marker: &mut Marker, dt: f64) -> Option<Boundary> {
        marker.velocity = marker
            .velocity
            .clamp(-self.max_velocity, self.max_velocity);
        marker.position += marker.velocity * dt;

        if marker.position >= self.bounds.max {
            marker.position = self.bounds.max;
            if marker.velocity > 0.0 {
                marker.velocity = -marker.velocity * self.bounce_factor;
            }
            Some(Boundary::Top)
        } else if marker.position <= self.bounds.min {
            marker.position = self.bounds.min;
            if marker.velocity < 0.0 {
                marker.velocity = -marker.velocity * self.bounce_factor;
            }
            Some(Boundary::Bottom)
        } else {
            None
        }
    }

    pub fn pinned_top(&self, marker: &Marker) -> bool {
        marker.position >= self.bounds.max
    }

    pub fn pinned_bottom(&self, marker: &Marker) -> bool {
        marker.position <= self.bounds.min
    }
}

/// Move `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
