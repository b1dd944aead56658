//! Phoneme-to-viseme (mouth shape) mapping.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::phoneme::{normalize_phoneme, strip_stress};
use crate::types::PhonemeToken;

/// Visual mouth-shape category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VisemeCategory {
    A,
    E,
    I,
    O,
    U,
    M,
    F,
    Th,
    T,
    S,
    R,
    K,
    W,
    Y,
    Ch,
    Rest,
}

impl VisemeCategory {
    pub const ALL: [VisemeCategory; 16] = [
        VisemeCategory::A,
        VisemeCategory::E,
        VisemeCategory::I,
        VisemeCategory::O,
        VisemeCategory::U,
        VisemeCategory::M,
        VisemeCategory::F,
        VisemeCategory::Th,
        VisemeCategory::T,
        VisemeCategory::S,
        VisemeCategory::R,
        VisemeCategory::K,
        VisemeCategory::W,
        VisemeCategory::Y,
        VisemeCategory::Ch,
        VisemeCategory::Rest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisemeCategory::A => "A",
            VisemeCategory::E => "E",
            VisemeCategory::I => "I",
            VisemeCategory::O => "O",
            VisemeCategory::U => "U",
            VisemeCategory::M => "M",
            VisemeCategory::F => "F",
            VisemeCategory::Th => "TH",
            VisemeCategory::T => "T",
            VisemeCategory::S => "S",
            VisemeCategory::R => "R",
            VisemeCategory::K => "K",
            VisemeCategory::W => "W",
            VisemeCategory::Y => "Y",
            VisemeCategory::Ch => "CH",
            VisemeCategory::Rest => "REST",
        }
    }
}

impl fmt::Display for VisemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static::lazy_static! {
    /// Upper-cased phoneme (stress stripped) to viseme, grouped by
    /// articulatory class. Single letters cover character-level tokens.
    static ref VISEME_TABLE: HashMap<&'static str, VisemeCategory> = {
        use VisemeCategory::*;
        let groups: &[(VisemeCategory, &[&str])] = &[
            // Vowels
            (A, &["A", "AH", "AA", "AE", "AW", "AY"]),
            (E, &["E", "EH", "EY", "ER"]),
            (I, &["I", "IH", "IY"]),
            (O, &["O", "OH", "AO", "OW", "OY"]),
            (U, &["U", "UH", "UW"]),
            // Bilabials
            (M, &["M", "P", "B"]),
            // Labiodentals
            (F, &["F", "V"]),
            // Dentals
            (Th, &["TH", "DH"]),
            // Alveolars
            (T, &["T", "D", "N", "L"]),
            // Sibilants
            (S, &["S", "Z", "SH", "ZH"]),
            (R, &["R"]),
            // Velars
            (K, &["K", "G"]),
            (W, &["W"]),
            (Y, &["Y"]),
            // Affricates
            (Ch, &["CH", "J", "JH"]),
        ];
        let mut m = HashMap::new();
        for (viseme, phonemes) in groups {
            for p in *phonemes {
                m.insert(*p, *viseme);
            }
        }
        m
    };
}

fn lookup(symbol: &str) -> Option<VisemeCategory> {
    let key = strip_stress(symbol).to_uppercase();
    VISEME_TABLE.get(key.as_str()).copied()
}

/// Map a phoneme symbol to its viseme. Never fails: anything outside the
/// table, including silence and pause markers, is `Rest`.
pub fn map_to_viseme(symbol: &str) -> VisemeCategory {
    if symbol.is_empty() {
        return VisemeCategory::Rest;
    }
    lookup(symbol)
        .or_else(|| lookup(&normalize_phoneme(symbol)))
        .unwrap_or(VisemeCategory::Rest)
}

/// Viseme for every token of a sequence, in order.
pub fn visemes_for(tokens: &[PhonemeToken]) -> Vec<VisemeCategory> {
    tokens.iter().map(|t| map_to_viseme(t.as_str())).collect()
}
