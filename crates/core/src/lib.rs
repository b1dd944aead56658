//! Pronunciation scoring: compares a recognized utterance with its target
//! at the phoneme, character, and viseme (mouth shape) level.
//!
//! The scoring functions are pure and total. File access is limited to
//! [`config`] and [`score::batch`].

pub mod config;
pub mod error;
pub mod language;
pub mod score;
pub mod types;

pub use config::{ScoringConfig, ScoringMode};
pub use error::{Result, ScoreError};
pub use language::g2p::{phoneme_sequence, Lexicon};
pub use language::tokenize::tokenize;
pub use score::aggregate::aggregate;
pub use score::classify::classify;
pub use score::report::{ScoreReport, Scorer};
pub use score::similarity::{similarity, text_similarity};
pub use score::viseme::{map_to_viseme, VisemeCategory};
pub use types::{MatchColor, MatchResult, MatchType, PhonemeSequence, PhonemeToken};
