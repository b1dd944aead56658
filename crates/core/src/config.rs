//! Scoring configuration.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Default score (percent) needed to pass an attempt.
pub const DEFAULT_PASS_THRESHOLD: u8 = 80;

/// What the overall similarity is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Phoneme sequences of target and transcription
    #[default]
    Phoneme,
    /// Raw characters of target and transcription text
    Sentence,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Phoneme => f.write_str("phoneme"),
            ScoringMode::Sentence => f.write_str("sentence"),
        }
    }
}

impl FromStr for ScoringMode {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "phoneme" => Ok(ScoringMode::Phoneme),
            "sentence" => Ok(ScoringMode::Sentence),
            other => Err(ScoreError::invalid_input(format!(
                "unknown scoring mode '{}' (expected 'phoneme' or 'sentence')",
                other
            ))),
        }
    }
}

/// Settings for a [`Scorer`](crate::score::report::Scorer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    /// Convert plain text to phonemes with the lexicon. When off, text
    /// that is not already a phoneme transcript is compared per character.
    pub use_g2p: bool,
    /// Similarity or viseme accuracy (percent) needed to pass
    pub pass_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            use_g2p: true,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ScoreError::io(format!("reading config {}", path.display()), e))?;
        let config: ScoringConfig = serde_json::from_str(&data)
            .map_err(|e| ScoreError::json(format!("parsing config {}", path.display()), e))?;
        config.validate()?;
        log::info!("Loaded scoring config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pass_threshold > 100 {
            return Err(ScoreError::invalid_input(format!(
                "pass_threshold must be 0-100, got {}",
                self.pass_threshold
            )));
        }
        Ok(())
    }
}
