//! Bionic reading formatter
//!
//! Emphasizes the leading portion of each word so the eye can anchor on it
//! and infer the rest, which speeds up visual scanning.

mod emphasis;
mod text;

pub use emphasis::{emphasize, STRONG_CLOSE, STRONG_OPEN};
pub use text::format;

/// Stateless bionic reading formatter.
///
/// Both operations are pure; the struct exists so hosts can hold a single
/// entry point, and so the WASM wrapper has something to own.
#[derive(Debug, Default, Clone, Copy)]
pub struct BionicFormatter;

impl BionicFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format an entire text: split on whitespace, emphasize each word,
    /// rejoin with single spaces.
    pub fn format(&self, text: &str) -> String {
        format(text)
    }

    /// Emphasize a single word.
    pub fn emphasize(&self, word: &str) -> String {
        emphasize(word)
    }
}
