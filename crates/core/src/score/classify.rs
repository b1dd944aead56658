//! Per-phoneme classification of spoken phonemes against the target.
//!
//! Comparison is strictly positional: target[i] is compared with spoken[i]
//! and nothing is re-synchronized. An inserted or dropped phoneme in the
//! spoken sequence shifts every later position, and those positions are
//! reported as mismatches. Downstream thresholds are tuned to this
//! behavior, so the edit-distance aligner in `similarity` is kept as a
//! separate path.

use crate::types::{MatchResult, MatchType, PhonemeToken};

/// Classify one position.
///
/// `None` means the spoken sequence ended before this target position.
pub fn classify_pair(target: &PhonemeToken, spoken: Option<&PhonemeToken>) -> MatchType {
    let Some(spoken) = spoken else {
        return MatchType::Mismatch;
    };
    if target == spoken {
        MatchType::Exact
    } else if target.base() == spoken.base() {
        MatchType::StressMismatch
    } else {
        MatchType::Mismatch
    }
}

/// Classify every target phoneme against the spoken phoneme at the same
/// index. The result always has one entry per target phoneme.
pub fn classify(target: &[PhonemeToken], spoken: &[PhonemeToken]) -> Vec<MatchResult> {
    target
        .iter()
        .enumerate()
        .map(|(i, target_ph)| {
            MatchResult::new(target_ph.clone(), classify_pair(target_ph, spoken.get(i)))
        })
        .collect()
}
