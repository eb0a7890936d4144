//! Reading line records and writing outlines.
//!
//! Line records arrive as a JSON array written by an external extractor.
//! Parsing is lenient: a field with the wrong type falls back to its default
//! and an element that is not an object is skipped with a warning.

use std::fs;
use std::path::Path;

use log::warn;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{DocumentOutline, LineRecord};

pub use crate::render::{to_json, JsonFormat};

/// Parse a JSON array of line records.
///
/// Returns [`Error::Json`] when the text is not JSON and
/// [`Error::InvalidInput`] when the top-level value is not an array.
pub fn parse_lines(json: &str) -> Result<Vec<LineRecord>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(Error::InvalidInput(format!(
            "expected a JSON array of line records, found {}",
            value_kind(&value)
        )));
    };

    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(fields) => lines.push(lenient_record(fields)),
            other => warn!(
                "skipping line record {}: expected an object, found {}",
                index,
                value_kind(&other)
            ),
        }
    }
    Ok(lines)
}

/// Read and parse a line-record file.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<LineRecord>> {
    let content = fs::read_to_string(path)?;
    parse_lines(&content)
}

/// Write an outline as JSON to a file.
pub fn write_outline<P: AsRef<Path>>(
    path: P,
    outline: &DocumentOutline,
    format: JsonFormat,
) -> Result<()> {
    let json = to_json(outline, format)?;
    fs::write(path, json)?;
    Ok(())
}

/// Deserialize one record, dropping fields whose values do not fit.
fn lenient_record(fields: Map<String, Value>) -> LineRecord {
    let mut kept = Map::with_capacity(fields.len());
    for (key, value) in fields {
        let mut single = Map::with_capacity(1);
        single.insert(key.clone(), value.clone());
        match serde_json::from_value::<LineRecord>(Value::Object(single)) {
            Ok(_) => {
                kept.insert(key, value);
            }
            Err(e) => warn!("ignoring malformed field '{}': {}", key, e),
        }
    }

    // Every kept field deserializes on its own, so the whole does too.
    serde_json::from_value(Value::Object(kept)).unwrap_or_default()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
