//! Fish catalog for a fishing location.
//!
//! Loaded from JSON. Selection is weighted by each entry's `chance`; the
//! caller supplies the random draw so this crate stays free of a random
//! source.

use serde::{Deserialize, Serialize};

use crate::config::FishParams;
use crate::constants::UNKNOWN_ORIGIN;
use crate::error::ConfigError;

/// One fish type available at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub fish: FishParams,
    /// Relative selection weight.
    pub chance: f64,
}

/// The fish types available at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishCatalog {
    /// Recorded as the origin of every fish caught here.
    pub origin_id: String,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
    /// Used when the catalog has nothing selectable.
    #[serde(default)]
    pub default_fish: FishParams,
}

impl Default for FishCatalog {
    fn default() -> Self {
        Self {
            origin_id: UNKNOWN_ORIGIN.to_string(),
            entries: Vec::new(),
            default_fish: FishParams::default(),
        }
    }
}

impl FishCatalog {
    /// # Errors
    ///
    /// Returns `ConfigError::Catalog` when the JSON does not describe a
    /// catalog, or a validation error for a bad entry.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let catalog: FishCatalog =
            serde_json::from_str(json).map_err(|e| ConfigError::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Catalog` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Catalog(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns the first invalid fish, or `ConfigError::Negative` for a
    /// negative or non-finite chance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_fish.validate()?;
        for entry in &self.entries {
            entry.fish.validate()?;
            if !entry.chance.is_finite() || entry.chance < 0.0 {
                return Err(ConfigError::Negative {
                    field: "catalog.chance",
                    value: entry.chance,
                });
            }
        }
        Ok(())
    }

    /// Look up a fish by id, including the default fish.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownFish` when nothing matches.
    pub fn get(&self, fish_id: &str) -> Result<&FishParams, ConfigError> {
        self.entries
            .iter()
            .map(|entry| &entry.fish)
            .chain(std::iter::once(&self.default_fish))
            .find(|fish| fish.id == fish_id)
            .ok_or_else(|| ConfigError::UnknownFish(fish_id.to_string()))
    }

    /// Sum of all entry chances.
    pub fn total_chance(&self) -> f64 {
        self.entries.iter().map(|entry| entry.chance).sum()
    }

    /// Select the entry whose cumulative chance first reaches `draw`, where
    /// `draw` is uniform in `[0, total_chance()]`.
    ///
    /// Falls back to the default fish when the catalog is empty or no entry
    /// can be selected.
    pub fn select(&self, draw: f64) -> &FishParams {
        if self.total_chance() <= 0.0 {
            log::warn!(
                "No selectable fish at {}, using default fish `{}`",
                self.origin_id,
                self.default_fish.id
            );
            return &self.default_fish;
        }

        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.chance;
            if entry.chance > 0.0 && draw <= cumulative {
                return &entry.fish;
            }
        }

        log::warn!(
            "Draw {draw} exceeded total chance at {}, using default fish `{}`",
            self.origin_id,
            self.default_fish.id
        );
        &self.default_fish
    }
}
