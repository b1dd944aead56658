//! Gamified feedback derived from scores: tiers, stars, pass/fail, and
//! exercise session summaries.

use serde::{Deserialize, Serialize};

/// Maximum number of stars shown for an attempt.
pub const MAX_STARS: u8 = 5;

/// Encouragement tier for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    KeepPracticing,
    Good,
    Great,
    Excellent,
}

impl FeedbackTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => FeedbackTier::Excellent,
            80..=89 => FeedbackTier::Great,
            60..=79 => FeedbackTier::Good,
            _ => FeedbackTier::KeepPracticing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent!",
            FeedbackTier::Great => "Great job!",
            FeedbackTier::Good => "Good try!",
            FeedbackTier::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Color band used when displaying a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Green,
            60..=79 => ScoreBand::Yellow,
            _ => ScoreBand::Red,
        }
    }
}

/// Stars earned: one per started 20 points, at most five.
pub fn stars(score: u8) -> u8 {
    score.div_ceil(20).min(MAX_STARS)
}

/// An attempt passes when either score reaches the threshold.
pub fn passes(similarity: u8, viseme_accuracy: u8, threshold: u8) -> bool {
    similarity >= threshold || viseme_accuracy >= threshold
}

/// Feedback attached to a scored attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub tier: FeedbackTier,
    pub band: ScoreBand,
    pub stars: u8,
    pub passed: bool,
}

impl Feedback {
    /// Tier, band and stars follow the lexical similarity; pass/fail also
    /// accepts viseme accuracy.
    pub fn new(similarity: u8, viseme_accuracy: u8, threshold: u8) -> Self {
        Self {
            tier: FeedbackTier::from_score(similarity),
            band: ScoreBand::from_score(similarity),
            stars: stars(similarity),
            passed: passes(similarity, viseme_accuracy, threshold),
        }
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

/// Percentage of expected words that appear anywhere in the spoken words.
///
/// Word order is ignored. Either side empty scores 0.
pub fn word_accuracy(spoken: &str, expected: &str) -> u8 {
    let spoken = spoken.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();
    if spoken.is_empty() || expected.is_empty() {
        return 0;
    }

    let spoken_words: Vec<&str> = spoken.split_whitespace().collect();
    let expected_words: Vec<&str> = expected.split_whitespace().collect();
    let matches = expected_words
        .iter()
        .filter(|w| spoken_words.contains(w))
        .count();
    ((matches as f64 / expected_words.len() as f64) * 100.0).round() as u8
}

/// Result of a whole exercise made of several scored items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Mean item score, rounded
    pub accuracy: u8,
    pub passed: bool,
    pub xp_earned: u32,
}

impl SessionSummary {
    /// Summarize item scores. A passed session earns the full `points`;
    /// otherwise half of them, rounded.
    pub fn from_scores(scores: &[u8], required_accuracy: u8, points: u32) -> Self {
        if scores.is_empty() {
            return Self {
                accuracy: 0,
                passed: false,
                xp_earned: (points as f64 * 0.5).round() as u32,
            };
        }

        let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64;
        let passed = mean >= required_accuracy as f64;
        let xp_earned = if passed {
            points
        } else {
            (points as f64 * 0.5).round() as u32
        };

        Self {
            accuracy: mean.round() as u8,
            passed,
            xp_earned,
        }
    }
}
