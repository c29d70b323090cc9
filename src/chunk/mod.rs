//! Speed-reading chunker
//!
//! Groups words into the short bursts an RSVP-style reader flashes one at a
//! time. Chunk width follows the target pace: roughly one chunk every tenth
//! of a second, so `ceil(wpm / 600)` words per chunk.

use smallvec::SmallVec;

/// Split `text` into reading chunks for the given words-per-minute pace.
///
/// Words are whitespace-split tokens; each chunk joins its words with single
/// spaces and the final chunk may be short. Empty input yields no chunks.
pub fn chunk_text(text: &str, wpm: u32) -> Vec<String> {
    let words_per_chunk = ((wpm as usize).div_ceil(600)).max(1);

    let mut chunks = Vec::new();
    let mut buf: SmallVec<[&str; 8]> = SmallVec::new();
    for word in text.split_whitespace() {
        buf.push(word);
        if buf.len() == words_per_chunk {
            chunks.push(buf.join(" "));
            buf.clear();
        }
    }
    if !buf.is_empty() {
        chunks.push(buf.join(" "));
    }
    chunks
}
