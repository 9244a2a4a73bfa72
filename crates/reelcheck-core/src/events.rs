//! Events emitted by a minigame session for inventory and UI collaborators.

use serde::{Deserialize, Serialize};

use crate::types::CaughtItem;

/// Session outcome events. Each session emits at most one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MinigameEvent {
    /// Progress reached +1. Carries every fish landed, the extra yield
    /// included.
    FishCaught { items: Vec<CaughtItem> },
    /// Progress reached -1.
    FishEscaped,
}
