//! Per-word emphasis boundary

use unicode_segmentation::UnicodeSegmentation;

/// Marker opening the emphasized prefix of a word.
pub const STRONG_OPEN: &str = "<strong>";
/// Marker closing the emphasized prefix of a word.
pub const STRONG_CLOSE: &str = "</strong>";

/// Fraction of each word that gets emphasized, rounded up.
const EMPHASIS_RATIO: f64 = 0.4;

/// Wrap the leading ~40% of `word` in `<strong>` markers.
///
/// Lengths are measured in grapheme clusters and the split point is a
/// grapheme boundary, so multi-byte characters are never cut in half.
/// Words of one or two graphemes come back unchanged; emphasizing the
/// whole of a very short word would defeat the anchoring effect.
pub fn emphasize(word: &str) -> String {
    let len = word.graphemes(true).count();
    if len <= 2 {
        return word.to_string();
    }

    // ceil(len * 0.4); always in 1..len for len >= 3, so both the prefix
    // and the suffix are non-empty.
    let bold_len = (len as f64 * EMPHASIS_RATIO).ceil() as usize;

    let split = word
        .grapheme_indices(true)
        .nth(bold_len)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(word.len());

    let mut out =
        String::with_capacity(word.len() + STRONG_OPEN.len() + STRONG_CLOSE.len());
    out.push_str(STRONG_OPEN);
    out.push_str(&word[..split]);
    out.push_str(STRONG_CLOSE);
    out.push_str(&word[split..]);
    out
}
