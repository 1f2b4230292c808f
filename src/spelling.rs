//! Tiered spelling correction.
//!
//! Candidates are generated at increasing edit distances, kept only when the
//! [`FrequencyModel`] knows them, weighted by distance and ranked by a strict
//! tier cascade. See [`ranker`] for the cascade itself.

pub mod corrector;
pub mod edits;
pub mod frequency;
pub mod ranker;
pub mod scorer;

// Re-export commonly used types
pub use corrector::{Corrector, CorrectorStats, TextCorrection};
pub use edits::{edits1, edits2, for_each_edit1, for_each_edit3};
pub use frequency::{DEFAULT_COUNT, FrequencyModel};
pub use ranker::{Correction, SelectedTier, Selection, TierRanker};
pub use scorer::{CandidateScorer, CandidateSet};
