//! Levenshtein edit distance and ratio similarity over symbol sequences.
//!
//! Works on any comparable symbols: characters of raw text for the lexical
//! score, or phoneme tokens for sequence-level similarity.

/// Unit-cost Levenshtein distance.
///
/// Rolls a single row of the `(len(b)+1) x (len(a)+1)` DP table.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // row[i] = distance between a[..i] and b[..j] for the current j
    let mut row: Vec<usize> = (0..=a.len()).collect();

    for (j, sb) in b.iter().enumerate() {
        let mut diag = row[0];
        row[0] = j + 1;
        for (i, sa) in a.iter().enumerate() {
            let substitution = diag + usize::from(sa != sb);
            let insertion = row[i] + 1;
            let deletion = row[i + 1] + 1;
            diag = row[i + 1];
            row[i + 1] = substitution.min(insertion).min(deletion);
        }
    }

    row[a.len()]
}

/// Ratio `(maxLen - distance) / maxLen` in `[0, 1]`.
///
/// Two empty sequences are a perfect match; exactly one empty is 0.
pub fn similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    let distance = edit_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Character-level similarity of two strings.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    similarity(&a, &b)
}

/// Convert a ratio to a rounded percentage in `0..=100`.
pub fn to_percent(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Lexical score of a transcription against the target text, ignoring
/// case and surrounding whitespace.
pub fn lexical_score(target: &str, transcription: &str) -> u8 {
    let target = target.trim().to_lowercase();
    let transcription = transcription.trim().to_lowercase();
    to_percent(text_similarity(&target, &transcription))
}
