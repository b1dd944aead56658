//! Split recognizer output or target strings into phoneme tokens.
//!
//! Space-delimited ARPABET transcripts are split on whitespace, with long
//! gaps (three or more spaces) kept as a `<space>` pause token. Anything
//! else is treated as orthographic text and split into lower-cased
//! characters.

use crate::language::phoneme::is_arpabet;
use crate::types::{PhonemeSequence, PhonemeToken, PAUSE_TOKEN};

/// Minimum run of spaces that counts as a pause.
const PAUSE_RUN: usize = 3;

/// Tokenize a transcript or plain text.
pub fn tokenize(input: &str) -> PhonemeSequence {
    let marked = mark_pauses(input);
    let tokens: Vec<&str> = marked.split_whitespace().collect();
    if looks_like_transcript(&tokens) {
        tokens.into_iter().map(PhonemeToken::from).collect()
    } else {
        tokenize_chars(input)
    }
}

/// True if `input` would be split as a phoneme transcript by [`tokenize`].
pub fn is_phoneme_transcript(input: &str) -> bool {
    let marked = mark_pauses(input);
    let tokens: Vec<&str> = marked.split_whitespace().collect();
    looks_like_transcript(&tokens)
}

/// One lower-cased token per character, whitespace included.
pub fn tokenize_chars(input: &str) -> PhonemeSequence {
    input
        .chars()
        .map(|c| PhonemeToken::new(c.to_lowercase().collect::<String>()))
        .collect()
}

/// Replace each run of `PAUSE_RUN` or more spaces with a pause token.
fn mark_pauses(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run = 0usize;

    let flush = |out: &mut String, run: usize| {
        if run >= PAUSE_RUN {
            out.push(' ');
            out.push_str(PAUSE_TOKEN);
            out.push(' ');
        } else {
            out.extend(std::iter::repeat(' ').take(run));
        }
    };

    for c in input.chars() {
        if c == ' ' {
            run += 1;
            continue;
        }
        flush(&mut out, run);
        run = 0;
        out.push(c);
    }
    flush(&mut out, run);
    out
}

/// Every token must be a phoneme or pause. A lone unstressed symbol such
/// as "OW" or "M" is ambiguous with an uppercase word and counts as text.
fn looks_like_transcript(tokens: &[&str]) -> bool {
    if !tokens.iter().all(|t| *t == PAUSE_TOKEN || is_arpabet(t)) {
        return false;
    }
    let symbols: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| *t != PAUSE_TOKEN)
        .collect();
    match symbols.as_slice() {
        [] => false,
        [single] => single.ends_with(|c: char| c.is_ascii_digit()),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(seq: &[PhonemeToken]) -> Vec<&str> {
        seq.iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_tokenize_transcript() {
        let seq = tokenize("K AE1 T");
        assert_eq!(symbols(&seq), vec!["K", "AE1", "T"]);
    }

    #[test]
    fn test_tokenize_drops_empty_tokens() {
        let seq = tokenize("  K  AE1\tT\n");
        assert_eq!(symbols(&seq), vec!["K", "AE1", "T"]);
    }

    #[test]
    fn test_tokenize_pause_marker() {
        let seq = tokenize("HH AH0 L OW1   W ER1 L D");
        assert_eq!(
            symbols(&seq),
            vec!["HH", "AH0", "L", "OW1", "<space>", "W", "ER1", "L", "D"]
        );
    }

    #[test]
    fn test_tokenize_long_run_is_one_pause() {
        let seq = tokenize("K      T");
        assert_eq!(symbols(&seq), vec!["K", "<space>", "T"]);
    }

    #[test]
    fn test_tokenize_plain_text_falls_back_to_chars() {
        let seq = tokenize("Cat");
        assert_eq!(symbols(&seq), vec!["c", "a", "t"]);

        let seq = tokenize("a cat");
        assert_eq!(symbols(&seq), vec!["a", " ", "c", "a", "t"]);
    }

    #[test]
    fn test_tokenize_mixed_input_is_text() {
        // One non-phoneme token makes the whole input orthographic
        assert!(!is_phoneme_transcript("K AE1 cat"));
        assert_eq!(tokenize("K x").len(), 3);
    }

    #[test]
    fn test_tokenize_total_on_degenerate_input() {
        assert!(tokenize("").is_empty());
        assert_eq!(tokenize("   ").len(), 3);
        assert_eq!(symbols(&tokenize("ÄÖ")), vec!["ä", "ö"]);
        assert_eq!(tokenize("日本").len(), 2);
    }

    #[test]
    fn test_is_phoneme_transcript() {
        assert!(is_phoneme_transcript("K AE1 T"));
        assert!(is_phoneme_transcript("S   IY1"));
        assert!(!is_phoneme_transcript("cat"));
        assert!(!is_phoneme_transcript("I AM HAPPY"));
        assert!(!is_phoneme_transcript(""));
    }

    #[test]
    fn test_single_symbol_needs_stress_marker() {
        assert!(!is_phoneme_transcript("OW"));
        assert!(!is_phoneme_transcript("M"));
        assert!(!is_phoneme_transcript("   AY   "));
        assert!(is_phoneme_transcript("OW1"));
        assert_eq!(symbols(&tokenize("OW")), vec!["o", "w"]);
    }
}
