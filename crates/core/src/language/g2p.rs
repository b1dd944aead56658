//! Grapheme-to-phoneme conversion backed by a CMU-format lexicon.
//!
//! The embedded lexicon covers the practice vocabulary. Words it does not
//! know go through a letter/digraph rule fallback, so every word with at
//! least one ASCII letter yields a non-empty pronunciation.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::{PhonemeSequence, PhonemeToken};

/// The embedded lexicon.
///
/// Format: one word per line, "WORD  PH1 PH2 PH3 ..."
/// Lines starting with ";;;" are comments.
const LEXICON_DATA: &str = include_str!("lexicon.txt");

static EMBEDDED: OnceLock<Lexicon> = OnceLock::new();

/// Letter pairs converted as a unit, checked before single letters.
const DIGRAPHS: &[(&str, &[&str])] = &[
    ("th", &["TH"]),
    ("sh", &["SH"]),
    ("ch", &["CH"]),
    ("ng", &["NG"]),
    ("ph", &["F"]),
    ("wh", &["W"]),
    ("ck", &["K"]),
    ("qu", &["K", "W"]),
    ("ee", &["IY1"]),
    ("ea", &["IY1"]),
    ("oo", &["UW1"]),
    ("ou", &["AW1"]),
    ("ow", &["OW1"]),
    ("ai", &["EY1"]),
    ("ay", &["EY1"]),
    ("oi", &["OY1"]),
    ("oy", &["OY1"]),
];

/// Word-to-pronunciation table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl Lexicon {
    /// Parse lexicon text in CMU dictionary format.
    ///
    /// Variant markers (`WORD(2)`) append to the word's variant list in
    /// file order. Malformed lines are skipped.
    pub fn parse(data: &str) -> Self {
        let mut entries: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        for line in data.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let Some((word_raw, phonemes_str)) = line.split_once(char::is_whitespace) else {
                continue;
            };

            // Strip variant marker: WORD(2) -> WORD
            let word = word_raw
                .split('(')
                .next()
                .unwrap_or(word_raw)
                .to_uppercase();

            let phonemes: Vec<String> = phonemes_str
                .split_whitespace()
                .map(|s| s.to_string())
                .collect();

            if !word.is_empty() && !phonemes.is_empty() {
                entries.entry(word).or_default().push(phonemes);
            }
        }
        Self { entries }
    }

    /// The lexicon compiled into the crate, parsed on first use.
    pub fn embedded() -> &'static Lexicon {
        EMBEDDED.get_or_init(|| {
            let lexicon = Lexicon::parse(LEXICON_DATA);
            log::debug!("Loaded embedded lexicon: {} words", lexicon.len());
            lexicon
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First pronunciation variant for a word, case-insensitive.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(&word.to_uppercase())
            .and_then(|variants| variants.first())
            .map(Vec::as_slice)
    }

    /// Convert a single word to ARPABET phonemes.
    ///
    /// Out-of-vocabulary words are converted from their ASCII letters only,
    /// so a word with none (e.g. "é", "日本") yields an empty sequence.
    pub fn word_to_phonemes(&self, word: &str) -> PhonemeSequence {
        match self.lookup(word) {
            Some(phonemes) => phonemes.iter().map(|p| PhonemeToken::new(p.as_str())).collect(),
            None => rule_g2p(word),
        }
    }

    /// Convert a word or sentence to phonemes, separating words with the
    /// pause marker.
    pub fn text_to_phonemes(&self, text: &str) -> PhonemeSequence {
        let mut result = PhonemeSequence::new();
        for word in text.split_whitespace() {
            let clean = strip_punct(word);
            if clean.is_empty() {
                continue;
            }
            let phonemes = self.word_to_phonemes(clean);
            if phonemes.is_empty() {
                continue;
            }
            if !result.is_empty() {
                result.push(PhonemeToken::pause());
            }
            result.extend(phonemes);
        }
        result
    }
}

/// Look up a word in the embedded lexicon.
pub fn lookup(word: &str) -> Option<&'static [String]> {
    Lexicon::embedded().lookup(word)
}

/// Convert a word to phonemes using the embedded lexicon.
pub fn word_to_phonemes(word: &str) -> PhonemeSequence {
    Lexicon::embedded().word_to_phonemes(word)
}

/// Phoneme sequence for a word or sentence using the embedded lexicon.
pub fn phoneme_sequence(text: &str) -> PhonemeSequence {
    Lexicon::embedded().text_to_phonemes(text)
}

/// Strip punctuation from the edges of a word.
fn strip_punct(word: &str) -> &str {
    word.trim_matches(|c: char| ".,!?;:\"'()-".contains(c))
}

/// Letter-rule fallback for out-of-vocabulary words.
///
/// A rough approximation; stressed vowels are marked with primary stress.
fn rule_g2p(word: &str) -> PhonemeSequence {
    let chars: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    let mut phonemes: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some((_, out)) = DIGRAPHS.iter().find(|(g, _)| *g == pair) {
                phonemes.extend_from_slice(out);
                i += 2;
                continue;
            }
        }

        let next = chars.get(i + 1).copied();
        let is_last = i + 1 == chars.len();
        match chars[i] {
            'a' => phonemes.push("AE1"),
            'c' if matches!(next, Some('e' | 'i' | 'y')) => phonemes.push("S"),
            'c' | 'k' | 'q' => phonemes.push("K"),
            // Silent final e
            'e' if is_last && !phonemes.is_empty() => {}
            'e' => phonemes.push("EH1"),
            'i' => phonemes.push("IH1"),
            'o' => phonemes.push("AA1"),
            'u' => phonemes.push("AH1"),
            'h' => phonemes.push("HH"),
            'j' => phonemes.push("JH"),
            'x' => phonemes.extend_from_slice(&["K", "S"]),
            'y' if phonemes.is_empty() => phonemes.push("Y"),
            'y' => phonemes.push("IY1"),
            'b' => phonemes.push("B"),
            'd' => phonemes.push("D"),
            'f' => phonemes.push("F"),
            'g' => phonemes.push("G"),
            'l' => phonemes.push("L"),
            'm' => phonemes.push("M"),
            'n' => phonemes.push("N"),
            'p' => phonemes.push("P"),
            'r' => phonemes.push("R"),
            's' => phonemes.push("S"),
            't' => phonemes.push("T"),
            'v' => phonemes.push("V"),
            'w' => phonemes.push("W"),
            'z' => phonemes.push("Z"),
            _ => {}
        }
        i += 1;
    }

    phonemes.into_iter().map(PhonemeToken::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sequence;

    #[test]
    fn test_embedded_lookup_common_words() {
        assert!(lookup("cat").is_some());
        assert!(lookup("hello").is_some());
        assert!(lookup("apple").is_some());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("hello"), lookup("HELLO"));
        assert_eq!(lookup("hello"), lookup("Hello"));
    }

    #[test]
    fn test_lookup_nonexistent() {
        assert!(lookup("xyzzyplugh").is_none());
    }

    #[test]
    fn test_word_to_phonemes_known() {
        assert_eq!(word_to_phonemes("cat"), sequence(&["K", "AE1", "T"]));
    }

    #[test]
    fn test_word_to_phonemes_oov() {
        assert!(!word_to_phonemes("xyzzyplugh").is_empty());
    }

    #[test]
    fn test_rule_g2p_digraphs() {
        assert_eq!(rule_g2p("ship"), sequence(&["SH", "IH1", "P"]));
        assert_eq!(rule_g2p("bake"), sequence(&["B", "AE1", "K"]));
        assert_eq!(rule_g2p("city")[0].as_str(), "S");
    }

    #[test]
    fn test_rule_g2p_no_letters() {
        assert!(rule_g2p("123").is_empty());
        assert!(rule_g2p("").is_empty());
        assert!(Lexicon::parse("").word_to_phonemes("日本").is_empty());
        assert_eq!(word_to_phonemes("café"), sequence(&["K", "AE1", "F"]));
    }

    #[test]
    fn test_parse_variants_and_comments() {
        let lex = Lexicon::parse(";;; comment\nTOMATO  T AH0 M EY1 T OW2\nTOMATO(2)  T AH0 M AA1 T OW2\n\nbad\n");
        assert_eq!(lex.len(), 1);
        // First variant in file order wins
        assert_eq!(lex.lookup("Tomato").map(|p| p[3].as_str()), Some("EY1"));
    }

    #[test]
    fn test_injected_lexicon_overrides_embedded() {
        let lex = Lexicon::parse("CAT  K AE2 T");
        assert_eq!(lex.word_to_phonemes("cat"), sequence(&["K", "AE2", "T"]));
    }

    #[test]
    fn test_text_to_phonemes_inserts_pauses() {
        let seq = phoneme_sequence("Hello, world!");
        let rendered: Vec<&str> = seq.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            rendered,
            vec!["HH", "AH0", "L", "OW1", "<space>", "W", "ER1", "L", "D"]
        );
    }

    #[test]
    fn test_text_to_phonemes_empty() {
        assert!(phoneme_sequence("").is_empty());
        assert!(phoneme_sequence("  ... ").is_empty());
    }
}
