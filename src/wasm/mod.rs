//! WASM bindings for the reading core

use wasm_bindgen::prelude::*;

use crate::{chunk_text, estimate_load, predict_difficulty, BionicFormatter, ReadingSession};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed reader wrapper
#[wasm_bindgen]
pub struct WasmReader {
    formatter: BionicFormatter,
    session: Option<ReadingSession>,
}

#[wasm_bindgen]
impl WasmReader {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            formatter: BionicFormatter::new(),
            session: None,
        }
    }

    /// Apply bionic emphasis across a whole text
    #[wasm_bindgen(js_name = applyBionicReading)]
    pub fn apply_bionic_reading(&self, text: &str) -> String {
        self.formatter.format(text)
    }

    /// Emphasize a single word (per-token UI highlighting)
    #[wasm_bindgen(js_name = emphasizeWord)]
    pub fn emphasize_word(&self, word: &str) -> String {
        self.formatter.emphasize(word)
    }

    /// Placeholder cognitive-load estimate
    #[wasm_bindgen(js_name = calculateCognitiveLoad)]
    pub fn calculate_cognitive_load(&self, text: &str) -> f64 {
        estimate_load(text)
    }

    /// Reading difficulty on a 0-10 scale
    #[wasm_bindgen(js_name = predictDifficulty)]
    pub fn predict_difficulty(&self, text: &str) -> u8 {
        predict_difficulty(text)
    }

    /// Split text into speed-reading chunks for the given pace
    #[wasm_bindgen(js_name = chunkText)]
    pub fn chunk_text(&self, text: &str, wpm: u32) -> js_sys::Array {
        chunk_text(text, wpm)
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Begin tracking a reading session over `text`
    #[wasm_bindgen(js_name = startSession)]
    pub fn start_session(&mut self, text: &str) {
        self.session = Some(ReadingSession::start(text, js_sys::Date::now()));
    }

    /// Accumulate focus time on an element; no-op before a session starts
    #[wasm_bindgen(js_name = trackFocus)]
    pub fn track_focus(&mut self, element_id: &str, duration_ms: f64) {
        if let Some(session) = self.session.as_mut() {
            session.track_focus(element_id, duration_ms.max(0.0) as u64);
        }
    }

    /// Session summary as a JSON string; empty before a session starts
    #[wasm_bindgen(js_name = sessionReport)]
    pub fn session_report(&self) -> String {
        match &self.session {
            Some(session) => serde_json::to_string(&session.report(js_sys::Date::now()))
                .unwrap_or_default(),
            None => String::new(),
        }
    }
}

impl Default for WasmReader {
    fn default() -> Self {
        Self::new()
    }
}
