//! JSON output renderer.
//!
//! Outputs `{"users": [...], "loading": .., "error": .., "draft": {...}}`.

use crate::output::PageRenderer;
use crate::page::ViewState;

/// JSON output renderer.
pub struct JsonRenderer;

impl PageRenderer for JsonRenderer {
    fn render(&self, state: &ViewState) -> String {
        let mut output = serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string());
        output.push('\n');
        output
    }
}
