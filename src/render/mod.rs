//! Rendering of labeled paragraphs into output formats.

mod json;
mod outline;

pub use json::{paragraphs_to_json, to_json, JsonFormat};
pub use outline::project;
