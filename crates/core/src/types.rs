use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::phoneme::strip_stress;

/// Pause marker inserted for long silences in a transcript.
pub const PAUSE_TOKEN: &str = "<space>";

/// A single phoneme symbol, e.g. "AH1", "T", or a lower-cased character
/// when no phoneme extraction was available.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhonemeToken(String);

impl PhonemeToken {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The empty token, used for positions past the end of a sequence.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn pause() -> Self {
        Self(PAUSE_TOKEN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol with trailing stress digits removed.
    pub fn base(&self) -> &str {
        strip_stress(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_pause(&self) -> bool {
        self.0 == PAUSE_TOKEN
    }
}

impl fmt::Display for PhonemeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhonemeToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PhonemeToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Phonemes in pronunciation order.
pub type PhonemeSequence = Vec<PhonemeToken>;

/// Build a sequence from string symbols.
pub fn sequence<S: AsRef<str>>(symbols: &[S]) -> PhonemeSequence {
    symbols.iter().map(|s| PhonemeToken::new(s.as_ref())).collect()
}

/// Render a sequence as a space-delimited transcript.
pub fn sequence_to_string(seq: &[PhonemeToken]) -> String {
    seq.iter()
        .map(PhonemeToken::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a sequence back into recognizer transcript form: symbols joined
/// by single spaces, with each pause restored as a three-space gap.
pub fn to_transcript(seq: &[PhonemeToken]) -> String {
    seq.iter()
        .map(|t| if t.is_pause() { " " } else { t.as_str() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// How well a spoken phoneme matched the target phoneme at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    Exact,
    StressMismatch,
    Mismatch,
}

impl MatchType {
    pub fn color(self) -> MatchColor {
        match self {
            MatchType::Exact => MatchColor::Green,
            MatchType::StressMismatch => MatchColor::Orange,
            MatchType::Mismatch => MatchColor::Red,
        }
    }
}

/// Display tag for a match, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchColor {
    Green,
    Orange,
    Red,
}

/// Classification of one target phoneme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The target phoneme at this position
    pub phoneme: PhonemeToken,
    pub match_type: MatchType,
    pub color: MatchColor,
}

impl MatchResult {
    pub fn new(phoneme: PhonemeToken, match_type: MatchType) -> Self {
        Self {
            phoneme,
            match_type,
            color: match_type.color(),
        }
    }
}
