//! Reading session tracking
//!
//! Host UIs feed timestamps in; the core never reads a clock, which keeps it
//! pure and portable to `wasm32-unknown-unknown` where `Instant` is
//! unavailable. The WASM layer passes `Date.now()` through.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Tracks one reading session: word count, elapsed time, and where the
/// reader's focus landed.
#[derive(Debug)]
pub struct ReadingSession {
    started_at_ms: f64,
    word_count: usize,
    focus_ms: FxHashMap<String, u64>,
}

impl ReadingSession {
    /// Begin a session over `text` at the given epoch-millisecond timestamp.
    pub fn start(text: &str, now_ms: f64) -> Self {
        Self {
            started_at_ms: now_ms,
            word_count: text.split_whitespace().count(),
            focus_ms: FxHashMap::default(),
        }
    }

    /// Accumulate focus time on a host element (e.g. a rendered block).
    pub fn track_focus(&mut self, element_id: &str, duration_ms: u64) {
        *self.focus_ms.entry(element_id.to_string()).or_insert(0) += duration_ms;
    }

    /// Per-element focus heatmap, in accumulated milliseconds.
    pub fn heatmap(&self) -> &FxHashMap<String, u64> {
        &self.focus_ms
    }

    pub fn words_read(&self) -> usize {
        self.word_count
    }

    /// Summarize the session as of `now_ms`.
    pub fn report(&self, now_ms: f64) -> ReadingReport {
        let duration_ms = (now_ms - self.started_at_ms).max(0.0);
        let words_per_minute = if duration_ms > 0.0 {
            (self.word_count as f64 / duration_ms * 60_000.0).round() as u32
        } else {
            0
        };

        ReadingReport {
            duration_secs: (duration_ms / 1000.0).round() as u64,
            words_read: self.word_count,
            words_per_minute,
        }
    }
}

/// Serializable session summary for host persistence or display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingReport {
    pub duration_secs: u64,
    pub words_read: usize,
    pub words_per_minute: u32,
}
