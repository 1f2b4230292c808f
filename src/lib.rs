//! # tierspell
//!
//! Frequency-weighted spelling correction for English words.
//!
//! ## Features
//!
//! - Add-one smoothed frequency model built from a plain corpus
//! - Candidate generation by deletion, transposition, substitution and insertion
//! - Distance-weighted scoring with a boost for already known words
//! - Tiered selection that only pays for distance-3 search when needed
//! - A bounded mode that never generates distance-3 candidates
//!
//! ```
//! use tierspell::spelling::{Corrector, FrequencyModel};
//!
//! let model = FrequencyModel::from_tokens(["the", "the", "house"]);
//! let corrector = Corrector::new(model);
//!
//! let corrections = corrector.correct("teh");
//! assert_eq!(corrections[0].word, "the");
//! assert_eq!(corrections[0].probability, 1.0);
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::{SpellConfig, TierWeights};
    pub use crate::error::{Result, SpellError};
    pub use crate::spelling::{Correction, Corrector, FrequencyModel, SelectedTier};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
