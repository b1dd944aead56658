//! Viseme agreement between detected and target mouth shapes.

use serde::{Deserialize, Serialize};

use crate::score::viseme::VisemeCategory;

/// Detected viseme paired with the target viseme at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisemePair {
    pub detected: VisemeCategory,
    pub target: VisemeCategory,
    #[serde(rename = "match")]
    pub is_match: bool,
}

/// Percentage of matching visemes over the overlapping prefix.
///
/// Only `min(len(detected), len(target))` positions are compared; extra
/// visemes on either side are ignored. Returns 0 when there is no overlap.
pub fn aggregate(detected: &[VisemeCategory], target: &[VisemeCategory]) -> u8 {
    let min_len = detected.len().min(target.len());
    if min_len == 0 {
        return 0;
    }
    let matches = detected
        .iter()
        .zip(target)
        .filter(|(d, t)| d == t)
        .count();
    ((matches as f64 / min_len as f64) * 100.0).round() as u8
}

/// One pair per detected viseme; targets past the end count as `Rest`.
pub fn viseme_pairs(detected: &[VisemeCategory], target: &[VisemeCategory]) -> Vec<VisemePair> {
    detected
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let t = target.get(i).copied().unwrap_or(VisemeCategory::Rest);
            VisemePair {
                detected: d,
                target: t,
                is_match: d == t,
            }
        })
        .collect()
}
