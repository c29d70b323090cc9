//! Bionic-Read: a bionic reading formatting core
//!
//! This crate provides the text-transformation engine with:
//! - Per-word emphasis boundaries (the leading ~40% of each word wrapped in
//!   `<strong>` markers to guide the eye)
//! - Whitespace-collapsing whole-text formatting
//! - Reading difficulty and pacing heuristics
//! - Session tracking for host reading UIs
//!
//! Everything is pure and synchronous; hosts supply text and render the
//! returned markup.

pub mod chunk;
pub mod format;
pub mod score;
pub mod session;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmReader;

// Re-export primary types
pub use chunk::chunk_text;
pub use format::{emphasize, format, BionicFormatter, STRONG_CLOSE, STRONG_OPEN};
pub use score::{estimate_load, predict_difficulty};
pub use session::{ReadingReport, ReadingSession};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reference_sentence() {
        let formatter = BionicFormatter::new();
        assert_eq!(
            formatter.format("Neural reading engine"),
            "<strong>Neu</strong>ral <strong>rea</strong>ding <strong>eng</strong>ine"
        );
    }

    #[test]
    fn test_emphasize_scenarios() {
        assert_eq!(emphasize("it"), "it");
        assert_eq!(emphasize("reading"), "<strong>rea</strong>ding");
    }

    #[test]
    fn test_load_stub() {
        assert_eq!(estimate_load("hello"), 0.25);
    }

    #[test]
    fn test_format_then_chunk_pipeline() {
        // a host flashing formatted chunks gets markers intact per word
        let chunks = chunk_text("guided rapid reading", 400);
        let marked: Vec<String> = chunks.iter().map(|c| format(c)).collect();
        assert_eq!(
            marked,
            vec![
                "<strong>gui</strong>ded",
                "<strong>ra</strong>pid",
                "<strong>rea</strong>ding"
            ]
        );
    }
}
