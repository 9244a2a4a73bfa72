//! Session data model: what a session is started with, the per-session
//! random draws for the catch, and the running tallies kept across sessions.
//!
//! Stored in the `Minigame` orchestrator; one `Session` exists per started
//! minigame.

use rand::Rng;

use reelcheck_core::config::{FishMultipliers, FishParams, MinigameTunables, Modifiers};
use reelcheck_core::constants::UNKNOWN_ORIGIN;
use reelcheck_core::error::ConfigError;
use reelcheck_core::types::{CaughtItem, Span};

use reelcheck_fish_ai::fsm::sample_span;
use reelcheck_fish_ai::profiles::get_profile;

use crate::systems::fish_motion::FishMotionController;
use crate::systems::hook::HookController;
use crate::systems::progress::CatchProgressTracker;

/// Everything a session is started with, resolved once.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    pub fish: FishParams,
    pub modifiers: Modifiers,
    pub multipliers: FishMultipliers,
    /// Recorded on every caught item.
    pub origin_id: String,
}

impl SessionRequest {
    pub fn new(fish: FishParams) -> Self {
        Self {
            fish,
            modifiers: Modifiers::default(),
            multipliers: FishMultipliers::default(),
            origin_id: UNKNOWN_ORIGIN.to_string(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_multipliers(mut self, multipliers: FishMultipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    pub fn with_origin(mut self, origin_id: impl Into<String>) -> Self {
        self.origin_id = origin_id.into();
        self
    }

    /// # Errors
    ///
    /// Returns the first invalid fish parameter or modifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fish.validate()?;
        self.modifiers.validate()?;
        self.multipliers.validate()?;
        Ok(())
    }
}

/// The fish landed on a successful catch.
///
/// The first fish's weight and the total amount are drawn at session start;
/// extra fish get their own weights when the catch lands.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchYield {
    pub fish_id: String,
    pub origin_id: String,
    /// Weight range after the fish-weight modifier.
    pub weight_span: Span,
    pub first_weight: f64,
    /// Total fish landed, at least 1.
    pub amount: u32,
}

impl CatchYield {
    pub fn draw<R: Rng>(request: &SessionRequest, rng: &mut R) -> Self {
        let weight_span = request
            .fish
            .weight_span()
            .scaled(request.modifiers.fish_weight);
        let first_weight = sample_span(weight_span, rng);
        let amount = rng.gen_range(request.fish.min_amount..=request.fish.max_amount);
        Self {
            fish_id: request.fish.id.clone(),
            origin_id: request.origin_id.clone(),
            weight_span,
            first_weight,
            amount,
        }
    }

    /// Produce the caught items: the pre-drawn fish first, then the extras.
    pub fn land<R: Rng>(&self, rng: &mut R) -> Vec<CaughtItem> {
        let mut items = Vec::with_capacity(self.amount as usize);
        items.push(self.item(self.first_weight));
        for _ in 1..self.amount {
            let weight = sample_span(self.weight_span, rng);
            items.push(self.item(weight));
        }
        items
    }

    fn item(&self, weight: f64) -> CaughtItem {
        CaughtItem {
            fish_id: self.fish_id.clone(),
            weight,
            origin_id: self.origin_id.clone(),
        }
    }
}

/// Mutable state of one running or finished session.
#[derive(Debug, Clone)]
pub struct Session {
    pub hook: HookController,
    pub fish: FishMotionController,
    pub progress: CatchProgressTracker,
    pub catch_yield: CatchYield,
    /// Steps taken.
    pub step: u64,
    pub elapsed_secs: f64,
}

impl Session {
    /// Resolve constants and per-session draws, with both markers at rest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for invalid tunables, request, or catch window.
    pub fn start<R: Rng>(
        tunables: &MinigameTunables,
        request: &SessionRequest,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        tunables.validate()?;
        request.validate()?;
        let half_window = tunables.half_catch_window(&request.modifiers)?;

        let profile = get_profile(&request.fish, &request.multipliers);
        let catch_yield = CatchYield::draw(request, rng);

        Ok(Self {
            hook: HookController::new(tunables, &request.modifiers, half_window),
            fish: FishMotionController::new(profile, tunables, rng),
            progress: CatchProgressTracker::new(tunables, &request.modifiers, half_window),
            catch_yield,
            step: 0,
            elapsed_secs: 0.0,
        })
    }
}

/// Running tallies across every session an orchestrator has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub sessions_started: u32,
    pub caught: u32,
    pub escaped: u32,
    pub cancelled: u32,
    /// Fish handed out across all catches, extra yield included.
    pub items_landed: u32,
}
