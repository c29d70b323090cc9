//! Text scoring heuristics

use unicode_segmentation::UnicodeSegmentation;

/// Words longer than this many graphemes count as complex.
const COMPLEX_WORD_LEN: usize = 12;

/// Placeholder cognitive-load estimate: grapheme count * 0.05.
///
/// Kept verbatim for host compatibility; it carries no real semantics and
/// will be replaced if a proper model ever lands.
pub fn estimate_load(text: &str) -> f64 {
    text.graphemes(true).count() as f64 * 0.05
}

/// Predict reading difficulty on a 0-10 scale.
///
/// Combines average sentence length, average word length, and the share of
/// complex words. Sentences are runs between `.`, `!` and `?`; words are
/// whitespace-split tokens. Empty input scores 0.
pub fn predict_difficulty(text: &str) -> u8 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0;
    }

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);

    let word_count = words.len() as f64;
    let avg_sentence_len = word_count / sentences as f64;
    let avg_word_len = words
        .iter()
        .map(|w| w.graphemes(true).count())
        .sum::<usize>() as f64
        / word_count;
    let complex_ratio = words
        .iter()
        .filter(|w| w.graphemes(true).count() > COMPLEX_WORD_LEN)
        .count() as f64
        / word_count;

    let difficulty = (avg_sentence_len / 5.0).min(4.0)
        + (avg_word_len / 2.0).min(3.0)
        + (complex_ratio * 10.0).min(3.0);

    difficulty.round().min(10.0) as u8
}
