//! Snapshot system: builds the `MinigameSnapshot` returned after each step.

use reelcheck_core::enums::SessionPhase;
use reelcheck_core::state::MinigameSnapshot;

use crate::session::Session;

/// Build a snapshot of the current session. With no session, only the phase
/// is meaningful.
pub fn build_snapshot(phase: SessionPhase, session: Option<&Session>) -> MinigameSnapshot {
    let Some(session) = session else {
        return MinigameSnapshot {
            phase,
            ..Default::default()
        };
    };

    MinigameSnapshot {
        phase,
        step: session.step,
        elapsed_secs: session.elapsed_secs,
        fish_position: session.fish.position(),
        fish_velocity: session.fish.velocity(),
        fish_state: session.fish.state(),
        hook_position: session.hook.position(),
        hook_velocity: session.hook.velocity(),
        half_catch_window: session.progress.half_window(),
        is_catching: session.progress.is_catching(),
        progress: session.progress.progress(),
    }
}
