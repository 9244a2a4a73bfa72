//! Minigame orchestrator: the public contract of the simulation.
//!
//! `Minigame` owns one session at a time, validates calls from the frame
//! loop, advances the systems in a fixed order (hook, fish, progress) and
//! buffers outcome events until the caller drains them. Completely headless
//! and driven by explicit `step(dt, reel_pressed)` calls, which keeps it
//! deterministic for a given seed and input sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use reelcheck_core::catalog::FishCatalog;
use reelcheck_core::config::{FishParams, MinigameTunables, Modifiers};
use reelcheck_core::enums::{FishState, Outcome, SessionPhase};
use reelcheck_core::error::MinigameError;
use reelcheck_core::events::MinigameEvent;
use reelcheck_core::state::MinigameSnapshot;

use crate::session::{Session, SessionRequest, SessionStats};
use crate::systems;

/// Configuration for a new orchestrator.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same session.
    pub seed: u64,
    pub tunables: MinigameTunables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tunables: MinigameTunables::default(),
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// The minigame orchestrator.
pub struct Minigame<R: Rng = ChaCha8Rng> {
    tunables: MinigameTunables,
    rng: R,
    phase: SessionPhase,
    session: Option<Session>,
    events: Vec<MinigameEvent>,
    stats: SessionStats,
}

impl Minigame<ChaCha8Rng> {
    /// Create an orchestrator with a seeded ChaCha RNG.
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(config.tunables, ChaCha8Rng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> Minigame<R> {
    /// Create an orchestrator around any random source.
    pub fn with_rng(tunables: MinigameTunables, rng: R) -> Self {
        Self {
            tunables,
            rng,
            phase: SessionPhase::Idle,
            session: None,
            events: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    /// Start a session for `fish` under `modifiers`.
    ///
    /// # Errors
    ///
    /// See [`Minigame::start_with`].
    pub fn start(&mut self, fish: FishParams, modifiers: Modifiers) -> Result<(), MinigameError> {
        self.start_with(SessionRequest::new(fish).with_modifiers(modifiers))
    }

    /// Start a session. Modifiers and tunables are resolved here once; both
    /// markers start at rest with the fish `Struggling` and progress at 0.
    ///
    /// # Errors
    ///
    /// `MinigameError::SessionActive` while a session is still running, and
    /// `MinigameError::Config` for any invalid tunable, fish parameter or
    /// modifier. Nothing changes on error.
    pub fn start_with(&mut self, request: SessionRequest) -> Result<(), MinigameError> {
        if self.phase == SessionPhase::Active {
            return Err(MinigameError::SessionActive);
        }

        let session = Session::start(&self.tunables, &request, &mut self.rng)?;
        log::info!(
            "Minigame started: fish `{}` from {} (window ±{:.3}, yield {})",
            request.fish.id,
            request.origin_id,
            session.progress.half_window(),
            session.catch_yield.amount
        );

        self.session = Some(session);
        self.phase = SessionPhase::Active;
        self.stats.sessions_started += 1;
        Ok(())
    }

    /// Start a session for the fish with `fish_id` from `catalog`.
    ///
    /// # Errors
    ///
    /// `ConfigError::UnknownFish` (wrapped) if the catalog has no such fish,
    /// plus everything [`Minigame::start_with`] returns.
    pub fn start_from_catalog(
        &mut self,
        catalog: &FishCatalog,
        fish_id: &str,
        modifiers: Modifiers,
    ) -> Result<(), MinigameError> {
        let fish = catalog.get(fish_id)?.clone();
        self.start_with(
            SessionRequest::new(fish)
                .with_modifiers(modifiers)
                .with_origin(catalog.origin_id.clone()),
        )
    }

    /// Start a session for a fish picked from `catalog` by weighted chance.
    /// Returns the id of the picked fish.
    ///
    /// # Errors
    ///
    /// Everything [`Minigame::start_with`] returns.
    pub fn start_random(
        &mut self,
        catalog: &FishCatalog,
        modifiers: Modifiers,
    ) -> Result<String, MinigameError> {
        if self.phase == SessionPhase::Active {
            return Err(MinigameError::SessionActive);
        }
        let total = catalog.total_chance().max(0.0);
        let draw = if total > 0.0 {
            self.rng.gen_range(0.0..=total)
        } else {
            0.0
        };
        let fish = catalog.select(draw).clone();
        let fish_id = fish.id.clone();
        self.start_with(
            SessionRequest::new(fish)
                .with_modifiers(modifiers)
                .with_origin(catalog.origin_id.clone()),
        )?;
        Ok(fish_id)
    }

    /// Advance the session by `dt` seconds and return the resulting snapshot.
    ///
    /// A finished session (caught, escaped or cancelled) is left untouched
    /// and its final snapshot is returned.
    ///
    /// # Errors
    ///
    /// `MinigameError::NotStarted` before the first `start`, and
    /// `MinigameError::InvalidDelta` for a negative or non-finite `dt`.
    pub fn step(&mut self, dt: f64, reel_pressed: bool) -> Result<MinigameSnapshot, MinigameError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(MinigameError::InvalidDelta(dt));
        }
        if self.phase == SessionPhase::Idle {
            return Err(MinigameError::NotStarted);
        }
        if self.phase.is_finished() {
            return Ok(self.snapshot());
        }

        let outcome = {
            let Some(session) = self.session.as_mut() else {
                return Err(MinigameError::NotStarted);
            };
            // 1. Hook
            session.hook.step(dt, reel_pressed);
            // 2. Fish state + motion
            session.fish.step(dt, &mut self.rng);
            // 3. Progress, on this step's positions for both markers
            let outcome =
                session
                    .progress
                    .update(session.fish.position(), session.hook.position(), dt);
            session.step += 1;
            session.elapsed_secs += dt;
            outcome
        };

        if let Some(outcome) = outcome {
            self.finish(outcome);
        }
        Ok(self.snapshot())
    }

    /// Force-terminate a running session without emitting an outcome event.
    /// Does nothing if no session is running.
    pub fn cancel(&mut self) {
        if self.phase != SessionPhase::Active {
            return;
        }
        self.finish(Outcome::Cancelled);
    }

    /// Snapshot of the current session without stepping.
    pub fn snapshot(&self) -> MinigameSnapshot {
        systems::snapshot::build_snapshot(self.phase, self.session.as_ref())
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<MinigameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Terminal result of the current session, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            SessionPhase::Caught => Some(Outcome::Caught),
            SessionPhase::Escaped => Some(Outcome::Escaped),
            SessionPhase::Cancelled => Some(Outcome::Cancelled),
            SessionPhase::Idle | SessionPhase::Active => None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn tunables(&self) -> &MinigameTunables {
        &self.tunables
    }

    /// Replace the tunables used by future sessions. The running session
    /// keeps the values it was started with.
    pub fn set_tunables(&mut self, tunables: MinigameTunables) {
        self.tunables = tunables;
    }

    /// Read-only view of the current session.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    fn finish(&mut self, outcome: Outcome) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match outcome {
            Outcome::Caught => {
                session.fish.finish(FishState::Caught);
                let items = session.catch_yield.land(&mut self.rng);
                log::info!(
                    "Fish caught after {:.2}s: {} x `{}`",
                    session.elapsed_secs,
                    items.len(),
                    session.catch_yield.fish_id
                );
                self.stats.caught += 1;
                self.stats.items_landed += items.len() as u32;
                self.events.push(MinigameEvent::FishCaught { items });
            }
            Outcome::Escaped => {
                session.fish.finish(FishState::Escaped);
                log::info!("Fish escaped after {:.2}s", session.elapsed_secs);
                self.stats.escaped += 1;
                self.events.push(MinigameEvent::FishEscaped);
            }
            // The fish keeps its live state; no event is emitted
            Outcome::Cancelled => {
                log::info!("Minigame cancelled after {:.2}s", session.elapsed_secs);
                self.stats.cancelled += 1;
            }
        }
        self.phase = outcome.into();
    }
}
