//! Receipt renderers.
//!
//! - **Text**: the document laid out as plain-text tables (`.txt`)
//! - **JSON**: the document model itself, pretty-printed (`.json`)

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use recibos_model::{DocumentRenderer, OutputFormat};

/// Renderer for the requested output format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn DocumentRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
