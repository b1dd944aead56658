//! End-to-end scoring of a transcription against a target utterance.

use serde::{Deserialize, Serialize};

use crate::config::{ScoringConfig, ScoringMode};
use crate::error::Result;
use crate::language::g2p::Lexicon;
use crate::language::tokenize::{is_phoneme_transcript, tokenize, tokenize_chars};
use crate::score::aggregate::{aggregate, viseme_pairs, VisemePair};
use crate::score::classify::classify;
use crate::score::feedback::Feedback;
use crate::score::similarity::{lexical_score, text_similarity, to_percent};
use crate::score::viseme::{visemes_for, VisemeCategory};
use crate::types::{to_transcript, MatchResult, PhonemeSequence};

/// Everything computed for one attempt.
///
/// `overall_similarity` and `viseme_accuracy` are independent percentages;
/// combining them is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub target_text: String,
    pub transcription: String,
    pub mode: ScoringMode,
    pub overall_similarity: u8,
    pub target_phonemes: PhonemeSequence,
    pub spoken_phonemes: PhonemeSequence,
    pub phoneme_matches: Vec<MatchResult>,
    pub viseme_accuracy: u8,
    pub detected_visemes: Vec<VisemeCategory>,
    pub target_visemes: Vec<VisemeCategory>,
    pub viseme_pairs: Vec<VisemePair>,
    pub feedback: Feedback,
}

/// Scores attempts with a fixed configuration and lexicon.
#[derive(Debug, Clone)]
pub struct Scorer<'a> {
    config: ScoringConfig,
    lexicon: &'a Lexicon,
}

impl Scorer<'static> {
    /// Scorer backed by the embedded lexicon.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        Scorer::with_lexicon(config, Lexicon::embedded())
    }
}

impl<'a> Scorer<'a> {
    pub fn with_lexicon(config: ScoringConfig, lexicon: &'a Lexicon) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, lexicon })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Phonemes for a target or transcription string.
    ///
    /// Phoneme transcripts are used as-is; plain text goes through the
    /// lexicon, or is split into characters when G2P is disabled.
    pub fn phonemes_for(&self, text: &str) -> PhonemeSequence {
        if is_phoneme_transcript(text) {
            tokenize(text)
        } else if self.config.use_g2p {
            self.lexicon.text_to_phonemes(text)
        } else {
            tokenize_chars(&text.trim().to_lowercase())
        }
    }

    /// Score a transcription against the target utterance.
    pub fn score(&self, target: &str, transcription: &str) -> ScoreReport {
        let target_phonemes = self.phonemes_for(target);
        let spoken_phonemes = self.phonemes_for(transcription);

        let overall_similarity = match self.config.mode {
            ScoringMode::Sentence => lexical_score(target, transcription),
            // Character-level over the rendered transcripts, so a stress
            // digit costs one character rather than a whole phoneme
            ScoringMode::Phoneme => to_percent(text_similarity(
                &to_transcript(&target_phonemes),
                &to_transcript(&spoken_phonemes),
            )),
        };

        let phoneme_matches = classify(&target_phonemes, &spoken_phonemes);
        let detected_visemes = visemes_for(&spoken_phonemes);
        let target_visemes = visemes_for(&target_phonemes);
        let viseme_accuracy = aggregate(&detected_visemes, &target_visemes);
        let pairs = viseme_pairs(&detected_visemes, &target_visemes);
        let feedback = Feedback::new(
            overall_similarity,
            viseme_accuracy,
            self.config.pass_threshold,
        );

        log::debug!(
            "Scored '{}' vs '{}' ({} mode): similarity {}%, visemes {}%",
            target,
            transcription,
            self.config.mode,
            overall_similarity,
            viseme_accuracy
        );

        ScoreReport {
            target_text: target.to_string(),
            transcription: transcription.to_string(),
            mode: self.config.mode,
            overall_similarity,
            target_phonemes,
            spoken_phonemes,
            phoneme_matches,
            viseme_accuracy,
            detected_visemes,
            target_visemes,
            viseme_pairs: pairs,
            feedback,
        }
    }
}
