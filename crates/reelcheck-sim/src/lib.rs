//! Simulation for the reelcheck fishing minigame.
//!
//! Owns the hook, fish and progress state of a session, advances them one
//! explicit step at a time, and produces `MinigameSnapshot`s and outcome
//! events for the caller.

pub mod encounter;
pub mod engine;
pub mod session;
pub mod systems;

pub use engine::{Minigame, SimConfig};
pub use reelcheck_core as core;
pub use session::SessionRequest;
