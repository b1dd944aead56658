//! Scoring many attempts from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::score::report::{ScoreReport, Scorer};

/// One attempt to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub target: String,
    pub transcription: String,
}

/// Read a JSON array of batch items.
pub fn load_batch(path: &Path) -> Result<Vec<BatchItem>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| ScoreError::io(format!("reading batch {}", path.display()), e))?;
    let items: Vec<BatchItem> = serde_json::from_str(&data)
        .map_err(|e| ScoreError::json(format!("parsing batch {}", path.display()), e))?;
    log::info!("Loaded {} batch item(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Score every item, preserving input order.
pub fn score_batch(scorer: &Scorer<'_>, items: &[BatchItem]) -> Vec<ScoreReport> {
    items
        .iter()
        .map(|item| scorer.score(&item.target, &item.transcription))
        .collect()
}

/// Write reports as a pretty-printed JSON array.
pub fn write_reports(path: &Path, reports: &[ScoreReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)
        .map_err(|e| ScoreError::json("serializing reports", e))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ScoreError::io(format!("creating {}", parent.display()), e))?;
    }
    std::fs::write(path, json)
        .map_err(|e| ScoreError::io(format!("writing {}", path.display()), e))?;
    log::info!("Wrote {} report(s) to {}", reports.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    #[test]
    fn test_load_and_score_batch() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("batch.json");
        std::fs::write(
            &input,
            r#"[
                {"target": "cat", "transcription": "K AE1 T"},
                {"target": "dog", "transcription": "D AO1"}
            ]"#,
        )
        .unwrap();

        let items = load_batch(&input).unwrap();
        assert_eq!(items.len(), 2);

        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let reports = score_batch(&scorer, &items);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].overall_similarity, 100);
        assert_eq!(reports[1].target_text, "dog");
        assert_eq!(reports[1].overall_similarity, 71);
    }

    #[test]
    fn test_write_reports_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out").join("reports.json");
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let reports = vec![scorer.score("sun", "S AH1 N")];

        write_reports(&output, &reports).unwrap();
        let loaded: Vec<ScoreReport> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(loaded, reports);
    }

    #[test]
    fn test_load_batch_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_batch(&dir.path().join("missing.json")),
            Err(ScoreError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"[{"target": "cat"}]"#).unwrap();
        assert!(matches!(load_batch(&bad), Err(ScoreError::Json { .. })));
    }
}
