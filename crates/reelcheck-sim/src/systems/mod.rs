//! Per-step systems that advance a session.
//!
//! Each system owns the state for its marker or accumulator and is advanced
//! by the orchestrator in a fixed order: hook, fish, progress.

pub mod fish_motion;
pub mod hook;
pub mod kinematics;
pub mod progress;
pub mod snapshot;
