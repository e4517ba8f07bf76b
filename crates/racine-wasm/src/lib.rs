// WASM bindings for the Racine French stemmer.
//
// Provides a `WasmRacine` class exported via wasm-bindgen. Token
// arrays cross the boundary as JavaScript arrays via serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const racine = new WasmRacine();
//   racine.stem("continuellement");            // => "continuel"
//   racine.isStopWord("les");                  // => true
//   racine.stemTokens(["les", "chevaux"]);     // => ["cheval"]
//   racine.stopWords();                        // => ["ai", "aie", ...]

use wasm_bindgen::prelude::*;

use racine_core::character::lowercase_word;

/// French stemmer and stop word filter for WebAssembly.
#[wasm_bindgen]
pub struct WasmRacine {}

#[wasm_bindgen]
impl WasmRacine {
    /// Create a new WasmRacine instance. The stemmer is stateless and
    /// carries no dictionary data, so construction is free.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> WasmRacine {
        WasmRacine {}
    }

    /// Stem a single word. Input is lowercased first.
    pub fn stem(&self, word: &str) -> String {
        racine_fr::stem_word(&lowercase_word(word))
    }

    /// Check whether a word is a French stop word (case-insensitive).
    #[wasm_bindgen(js_name = isStopWord)]
    pub fn is_stop_word(&self, word: &str) -> bool {
        racine_fr::stopwords::is_stop_word(word)
    }

    /// Run the full indexing pipeline over an array of tokens:
    /// lowercase, drop stop words and empty tokens, stem the rest.
    /// Returns a JavaScript array of stems.
    #[wasm_bindgen(js_name = stemTokens)]
    pub fn stem_tokens(&self, tokens: JsValue) -> Result<JsValue, JsError> {
        let tokens: Vec<String> = serde_wasm_bindgen::from_value(tokens)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let stems: Vec<String> = tokens
            .iter()
            .map(|t| lowercase_word(t.trim()))
            .filter(|t| !t.is_empty() && !racine_fr::stopwords::is_stop_word(t))
            .map(|t| racine_fr::stem_word(&t))
            .collect();
        serde_wasm_bindgen::to_value(&stems).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Return the stop word inventory as a JavaScript array, sorted.
    #[wasm_bindgen(js_name = stopWords)]
    pub fn stop_words(&self) -> Result<JsValue, JsError> {
        let mut words: Vec<&str> = racine_fr::stopwords::STOP_WORDS.to_vec();
        words.sort_unstable();
        serde_wasm_bindgen::to_value(&words).map_err(|e| JsError::new(&e.to_string()))
    }
}
