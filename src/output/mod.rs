//! Page renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::page::ViewState;

/// Trait for rendering the users page to an output format.
pub trait PageRenderer: Send + Sync {
    /// Render the full page for the given state.
    fn render(&self, state: &ViewState) -> String;
}
