//! JSON rendering for outlines and labeled paragraphs.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{DocumentOutline, ParagraphRecord};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an outline to JSON.
pub fn to_json(outline: &DocumentOutline, format: JsonFormat) -> Result<String> {
    serialize(outline, format)
}

/// Convert labeled paragraphs to JSON (debug output, includes all features).
pub fn paragraphs_to_json(paragraphs: &[ParagraphRecord], format: JsonFormat) -> Result<String> {
    serialize(paragraphs, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
