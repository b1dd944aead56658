//! ARPABET symbol inventory, stress handling, and IPA normalization.

use std::collections::HashSet;

lazy_static::lazy_static! {
    /// IPA-to-ARPABET mapping for recognizers that emit IPA symbols.
    static ref IPA_TO_ARPABET: Vec<(&'static str, &'static str)> = vec![
        // Diphthongs first (multi-char)
        ("aɪ", "AY"), ("aʊ", "AW"), ("eɪ", "EY"), ("oʊ", "OW"), ("ɔɪ", "OY"),
        ("tʃ", "CH"), ("dʒ", "JH"),
        // Vowels
        ("i", "IY"), ("ɪ", "IH"), ("e", "EY"), ("ɛ", "EH"), ("æ", "AE"),
        ("ɑ", "AA"), ("ɒ", "AA"), ("ɔ", "AO"), ("o", "OW"), ("ʊ", "UH"),
        ("u", "UW"), ("ə", "AH"), ("ɜ", "ER"), ("ɝ", "ER"), ("ɚ", "ER"),
        ("ɐ", "AH"), ("ʌ", "AH"), ("a", "AA"),
        // Consonants — stops
        ("p", "P"), ("b", "B"), ("t", "T"), ("d", "D"), ("k", "K"), ("g", "G"),
        ("ɡ", "G"),
        // Consonants — nasals
        ("m", "M"), ("n", "N"), ("ŋ", "NG"),
        // Consonants — fricatives
        ("f", "F"), ("v", "V"), ("θ", "TH"), ("ð", "DH"), ("s", "S"),
        ("z", "Z"), ("ʃ", "SH"), ("ʒ", "ZH"), ("h", "HH"),
        // Consonants — liquids/rhotics
        ("l", "L"), ("ɫ", "L"), ("r", "R"), ("ɹ", "R"), ("ɾ", "R"),
        // Consonants — glides
        ("j", "Y"), ("w", "W"),
    ];

    /// The 39-symbol CMU ARPABET inventory, without stress markers.
    static ref ARPABET: HashSet<&'static str> = [
        "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY",
        "OW", "OY", "UH", "UW",
        "B", "CH", "D", "DH", "F", "G", "HH", "JH", "K", "L", "M", "N", "NG",
        "P", "R", "S", "SH", "T", "TH", "V", "W", "Y", "Z", "ZH",
    ]
    .into_iter()
    .collect();
}

/// Strip trailing stress markers (any ASCII digits) from a phoneme.
pub fn strip_stress(phoneme: &str) -> &str {
    phoneme.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// True if `symbol` is an uppercase ARPABET phoneme, stress marker allowed.
pub fn is_arpabet(symbol: &str) -> bool {
    ARPABET.contains(strip_stress(symbol))
}

/// Convert an IPA phoneme to ARPABET if possible, passthrough otherwise.
pub fn normalize_phoneme(phoneme: &str) -> String {
    if phoneme.is_empty() {
        return phoneme.to_string();
    }

    // ARPABET and plain ASCII text are never IPA
    if phoneme.is_ascii() {
        return phoneme.to_string();
    }

    // Strip IPA length and stress marks
    let cleaned = phoneme
        .trim_start_matches(['ˈ', 'ˌ'])
        .trim_end_matches(['ː', 'ˑ']);

    IPA_TO_ARPABET
        .iter()
        .find(|(ipa, _)| *ipa == cleaned)
        .map(|(_, arpabet)| arpabet.to_string())
        .unwrap_or_else(|| phoneme.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_stress() {
        assert_eq!(strip_stress("AE1"), "AE");
        assert_eq!(strip_stress("K"), "K");
        assert_eq!(strip_stress("IY0"), "IY");
        assert_eq!(strip_stress("12"), "");
    }

    #[test]
    fn test_is_arpabet() {
        assert!(is_arpabet("AE1"));
        assert!(is_arpabet("NG"));
        assert!(!is_arpabet("ae1"));
        assert!(!is_arpabet("HELLO"));
        assert!(!is_arpabet(""));
    }

    #[test]
    fn test_normalize_phoneme_ipa() {
        assert_eq!(normalize_phoneme("æ"), "AE");
        assert_eq!(normalize_phoneme("ʃ"), "SH");
        assert_eq!(normalize_phoneme("aɪ"), "AY");
        assert_eq!(normalize_phoneme("tʃ"), "CH");
        assert_eq!(normalize_phoneme("iː"), "IY");
        assert_eq!(normalize_phoneme("ˈɛ"), "EH");
    }

    #[test]
    fn test_normalize_phoneme_already_arpabet() {
        assert_eq!(normalize_phoneme("AE1"), "AE1");
        assert_eq!(normalize_phoneme("K"), "K");
        assert_eq!(normalize_phoneme("ZZZ"), "ZZZ");
    }

    #[test]
    fn test_normalize_phoneme_unknown_passthrough() {
        assert_eq!(normalize_phoneme("?"), "?");
        assert_eq!(normalize_phoneme(""), "");
    }

    #[test]
    fn test_normalize_phoneme_ascii_is_not_ipa() {
        // Lowercase words must not be read as IPA prefixes
        assert_eq!(normalize_phoneme("zzz"), "zzz");
        assert_eq!(normalize_phoneme("bogus"), "bogus");
        assert_eq!(normalize_phoneme("k"), "k");
    }

    #[test]
    fn test_normalize_phoneme_requires_whole_symbol() {
        assert_eq!(normalize_phoneme("æt"), "æt");
        assert_eq!(normalize_phoneme("ʃʃ"), "ʃʃ");
    }
}
