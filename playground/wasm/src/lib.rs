//! EBNF Playground WASM Bindings
//!
//! Exposes the highlighter to JavaScript. The host builds markup from the
//! returned spans; nothing here touches the DOM.

use ebnf_highlight::{example_cell, highlight, ExampleCell, Highlighted, STYLE_CLASSES};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import console.log from JavaScript
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Initialize the WASM module (called once on load).
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook to log to console
    std::panic::set_hook(Box::new(console_error_panic_hook));
}

fn console_error_panic_hook(info: &std::panic::PanicHookInfo) {
    log(&info.to_string());
}

/// Error payload returned when a result cannot be serialized.
#[derive(Serialize)]
struct BridgeError {
    error: String,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        let fallback = BridgeError {
            error: format!("Serialization error: {e}"),
        };
        serde_json::to_string(&fallback)
            .unwrap_or_else(|_| r#"{"error":"Serialization error"}"#.to_string())
    })
}

/// Classify grammar text and return the spans as JSON.
///
/// Returns a JSON object with:
/// - `spans`: `[{ kind, class, text, start, end }]` in source order
/// - `stats`: `{ <kind>: { tokens, bytes } }` for every kind
#[wasm_bindgen]
pub fn highlight_ebnf(source: &str) -> String {
    let result: Highlighted<'_> = highlight(source);
    to_json(&result)
}

/// The bundled example grammar.
#[wasm_bindgen]
pub fn example_grammar() -> String {
    let cell: ExampleCell = example_cell();
    cell.grammar.to_string()
}

/// The bundled example cell (`title`, `text`, `grammar`) as JSON.
#[wasm_bindgen]
pub fn example_cell_json() -> String {
    to_json(&example_cell())
}

/// JSON array of every style class the host should define.
#[wasm_bindgen]
pub fn style_classes() -> String {
    to_json(&STYLE_CLASSES)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;

    #[test]
    fn highlight_json_has_spans_and_stats() {
        let json = highlight_ebnf("a = \"b\" ;");
        let value: serde_json::Value = serde_json::from_str(&json).expect("highlight json parses");
        assert_eq!(value["spans"][0]["class"], "token-name");
        assert_eq!(value["stats"]["string"]["tokens"], 1);
    }

    #[test]
    fn style_classes_lists_all_kinds() {
        let json = style_classes();
        let value: Vec<String> = serde_json::from_str(&json).expect("class list parses");
        assert_eq!(value.len(), 5);
        assert!(value.iter().all(|c| c.starts_with("token-")));
    }

    #[test]
    fn example_cell_round_trips_grammar() {
        let value: serde_json::Value =
            serde_json::from_str(&example_cell_json()).expect("example cell parses");
        assert_eq!(value["grammar"], example_grammar());
    }
}
