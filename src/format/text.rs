//! Whole-text formatting

use super::emphasis::emphasize;

/// Apply bionic emphasis across an entire text.
///
/// Splits on runs of whitespace, emphasizes each token in order, and rejoins
/// with single spaces. Inter-word whitespace runs collapse; empty or
/// all-whitespace input yields the empty string. Total over all inputs, no
/// error path.
pub fn format(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&emphasize(word));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{STRONG_CLOSE, STRONG_OPEN};

    #[test]
    fn test_empty_input() {
        assert_eq!(format(""), "");
        assert_eq!(format("   "), "");
        assert_eq!(format("\t\n  \n"), "");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(format("reading"), "<strong>rea</strong>ding");
    }

    #[test]
    fn test_reference_sentence() {
        assert_eq!(
            format("Neural reading engine"),
            "<strong>Neu</strong>ral <strong>rea</strong>ding <strong>eng</strong>ine"
        );
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(format("a   b"), format("a b"));
        assert_eq!(format("  up\tand\ndown  "), format("up and down"));
    }

    #[test]
    fn test_token_order_preserved() {
        let input = "one two three four five";
        let restored: Vec<String> = format(input)
            .split(' ')
            .map(|w| {
                w.replacen(STRONG_OPEN, "", 1)
                    .replacen(STRONG_CLOSE, "", 1)
            })
            .collect();
        assert_eq!(restored, input.split(' ').collect::<Vec<_>>());
    }

    #[test]
    fn test_short_words_pass_through() {
        assert_eq!(format("it is now"), "it is <strong>no</strong>w");
    }

    #[test]
    fn test_pure_and_deterministic() {
        let input = "the same input every time";
        assert_eq!(format(input), format(input));
    }
}
