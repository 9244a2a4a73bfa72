//! Fish encounter bookkeeping outside the minigame.
//!
//! A fish waits near the player for a limited time and tolerates a limited
//! number of failed minigames before it leaves. The leave timer is paused
//! while a minigame is running. This is the consumer of the fail count that
//! escaped sessions increment.

use serde::{Deserialize, Serialize};

use reelcheck_core::constants::{ENCOUNTER_FAILS_BEFORE_ESCAPE, ENCOUNTER_TIME_UNTIL_LEAVING};
use reelcheck_core::events::MinigameEvent;

/// Why an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterEnd {
    Caught,
    /// Too many failed minigames.
    Spooked,
    /// Leave timer ran out.
    LeftOnItsOwn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishEncounter {
    pub fish_id: String,
    pub time_until_leaving: f64,
    pub fails_before_escape: u32,
    fail_count: u32,
    leave_timer: f64,
    paused: bool,
    ended: Option<EncounterEnd>,
}

impl FishEncounter {
    pub fn new(fish_id: impl Into<String>) -> Self {
        Self {
            fish_id: fish_id.into(),
            time_until_leaving: ENCOUNTER_TIME_UNTIL_LEAVING,
            fails_before_escape: ENCOUNTER_FAILS_BEFORE_ESCAPE,
            fail_count: 0,
            leave_timer: 0.0,
            paused: false,
            ended: None,
        }
    }

    /// Pause the leave timer while a minigame runs.
    pub fn begin_fishing(&mut self) {
        self.paused = true;
    }

    /// Resume the leave timer after a minigame.
    pub fn end_fishing(&mut self) {
        self.paused = false;
    }

    pub fn reset_leave_timer(&mut self) {
        self.leave_timer = 0.0;
    }

    /// Advance the leave timer. Returns the end reason on the tick the fish
    /// leaves.
    pub fn tick(&mut self, dt: f64) -> Option<EncounterEnd> {
        if self.ended.is_some() || self.paused {
            return None;
        }
        self.leave_timer += dt;
        if self.leave_timer > self.time_until_leaving {
            log::debug!("Fish `{}` left on its own", self.fish_id);
            self.ended = Some(EncounterEnd::LeftOnItsOwn);
            return self.ended;
        }
        None
    }

    /// Apply a minigame outcome event. Returns the end reason if the
    /// encounter ends because of it.
    pub fn record_event(&mut self, event: &MinigameEvent) -> Option<EncounterEnd> {
        if self.ended.is_some() {
            return None;
        }
        match event {
            MinigameEvent::FishCaught { .. } => {
                self.ended = Some(EncounterEnd::Caught);
            }
            MinigameEvent::FishEscaped => {
                self.fail_count += 1;
                log::debug!(
                    "Fish `{}` escaped ({}/{})",
                    self.fish_id,
                    self.fail_count,
                    self.fails_before_escape
                );
                if self.fail_count >= self.fails_before_escape {
                    self.ended = Some(EncounterEnd::Spooked);
                }
            }
        }
        self.ended
    }

    /// Whether the player may start another minigame for this fish.
    pub fn can_fish(&self) -> bool {
        self.ended.is_none()
    }

    pub fn fail_count(&self) -> u32 {
        self.fail_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn leave_timer(&self) -> f64 {
        self.leave_timer
    }

    pub fn ended(&self) -> Option<EncounterEnd> {
        self.ended
    }
}
