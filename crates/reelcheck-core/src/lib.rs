//! Core types and definitions for the reelcheck fishing minigame.
//!
//! This crate defines the vocabulary shared across all other crates:
//! tunables, fish parameters, modifiers, events, snapshots, errors and
//! constants. It has no dependency on a random source or any runtime.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
