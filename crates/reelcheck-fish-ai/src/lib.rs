//! Fish AI for reelcheck.
//!
//! Implements the fish behavior state machine decisions and the
//! stat-driven behavior profile. Everything here operates on plain data and
//! an injected random source; the stateful controller lives in the sim crate.

pub mod fsm;
pub mod profiles;

pub use reelcheck_core as core;

#[cfg(test)]
mod tests;
