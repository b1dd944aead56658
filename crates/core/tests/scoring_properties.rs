use phonoscore_core::{
    aggregate, classify, map_to_viseme, similarity, text_similarity, tokenize, MatchColor,
    MatchType, PhonemeToken, ScoreReport, Scorer, ScoringConfig, VisemeCategory,
};

fn tokens(symbols: &[&str]) -> Vec<PhonemeToken> {
    symbols.iter().map(|s| PhonemeToken::from(*s)).collect()
}

#[test]
fn tokenize_never_fails() {
    let inputs = [
        "",
        " ",
        "     ",
        "\t\n",
        "K AE1 T",
        "hello   world",
        "ñandú",
        "🙂🙂",
        "K   <space>   T",
    ];
    for input in inputs {
        let seq = tokenize(input);
        assert!(seq.iter().all(|t| !t.as_str().is_empty()), "{input:?}");
    }
    let long = "AH0 ".repeat(10_000);
    assert_eq!(tokenize(&long).len(), 10_000);
}

#[test]
fn viseme_mapping_is_total() {
    assert_eq!(map_to_viseme("ZZZ"), VisemeCategory::Rest);
    for symbol in ["", "AA1", "jh", "?", "<space>", "ŋ", "x y"] {
        assert!(VisemeCategory::ALL.contains(&map_to_viseme(symbol)));
    }
}

#[test]
fn similarity_bounds() {
    assert_eq!(text_similarity("abc", "abc"), 1.0);
    assert_eq!(text_similarity("", ""), 1.0);
    assert_eq!(text_similarity("", "abc"), 0.0);
    assert!((text_similarity("kitten", "sitting") - 0.571).abs() < 0.001);

    let seq = tokens(&["S", "IY1"]);
    assert_eq!(similarity(&seq, &seq), 1.0);
}

#[test]
fn classification_matches_stress_rules() {
    let matches = classify(&tokens(&["K", "AE1", "T"]), &tokens(&["K", "AE2", "T"]));
    let kinds: Vec<(MatchType, MatchColor)> =
        matches.iter().map(|m| (m.match_type, m.color)).collect();
    assert_eq!(
        kinds,
        vec![
            (MatchType::Exact, MatchColor::Green),
            (MatchType::StressMismatch, MatchColor::Orange),
            (MatchType::Exact, MatchColor::Green),
        ]
    );
}

#[test]
fn classification_pads_short_spoken_with_mismatches() {
    let matches = classify(&tokens(&["M", "AA1", "M", "AH0"]), &tokens(&["M", "AA1"]));
    assert_eq!(matches.len(), 4);
    assert!(matches[2..].iter().all(|m| m.match_type == MatchType::Mismatch));
}

#[test]
fn viseme_accuracy_of_nothing_is_zero() {
    assert_eq!(aggregate(&[], &[]), 0);
}

#[test]
fn reports_are_reproducible() {
    let scorer = Scorer::new(ScoringConfig::default()).unwrap();
    let first: Vec<ScoreReport> = (0..5).map(|_| scorer.score("I am happy", "I am hapy")).collect();
    let rendered: Vec<String> = first
        .iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect();
    assert!(rendered.windows(2).all(|w| w[0] == w[1]));
}
