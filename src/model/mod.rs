//! Data model shared by the grouping, labeling and projection stages.
//!
//! Lines come in from an external extractor, paragraphs are derived from
//! them, and the outline is the only thing that leaves the pipeline.

mod line;
mod outline;
mod paragraph;

pub use line::{Alignment, BBox, LineRecord, TextCase};
pub use outline::{DocumentOutline, OutlineEntry};
pub use paragraph::{HeadingLevel, Level, ParagraphRecord};
