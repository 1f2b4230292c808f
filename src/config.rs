//! Configuration for the tiered corrector.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};

/// Boost applied to the original word when it is itself known.
pub const WEIGHT_0AWAY: u64 = 100;
/// Weight for candidates one edit away.
pub const WEIGHT_1AWAY: u64 = 95;
/// Weight for candidates two edits away.
pub const WEIGHT_2AWAY: u64 = 4;
/// Weight for candidates three edits away.
pub const WEIGHT_3AWAY: u64 = 1;

/// Distance weights gathered from "Design of an interactive spell checker:
/// optimizing the list of offered words" (Garfinkel, Fernandez, Gopal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierWeights {
    /// Multiplier for the input word when it appears among its own candidates.
    pub weight_0away: u64,
    /// Multiplier for distance-1 candidates.
    pub weight_1away: u64,
    /// Multiplier for distance-2 candidates.
    pub weight_2away: u64,
    /// Multiplier for distance-3 candidates.
    pub weight_3away: u64,
}

impl Default for TierWeights {
    fn default() -> Self {
        TierWeights {
            weight_0away: WEIGHT_0AWAY,
            weight_1away: WEIGHT_1AWAY,
            weight_2away: WEIGHT_2AWAY,
            weight_3away: WEIGHT_3AWAY,
        }
    }
}

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Per-tier score multipliers.
    pub weights: TierWeights,
    /// Maximum number of corrections returned per word.
    pub max_results: usize,
    /// Words shorter than this only consider distance-1 candidates
    /// when any exist.
    pub short_word_len: usize,
    /// Decimal places kept when rounding probabilities.
    pub precision: u32,
}

impl Default for SpellConfig {
    fn default() -> Self {
        SpellConfig {
            weights: TierWeights::default(),
            max_results: 5,
            short_word_len: 4,
            precision: 3,
        }
    }
}

impl SpellConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SpellConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check that the configuration can produce meaningful results.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SpellError::invalid_config("max_results must be positive"));
        }
        if self.precision > 9 {
            return Err(SpellError::invalid_config(format!(
                "precision {} is out of range (0-9)",
                self.precision
            )));
        }
        let w = &self.weights;
        if w.weight_0away == 0 || w.weight_1away == 0 || w.weight_2away == 0 || w.weight_3away == 0
        {
            return Err(SpellError::invalid_config("tier weights must be positive"));
        }
        Ok(())
    }
}
