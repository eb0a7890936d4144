//! Layout analysis: line features, paragraph grouping and font ranking.

mod features;
mod fonts;
mod grouping;
mod options;

pub use features::{
    derive_document_features, derive_features, detect_alignment, detect_text_case,
};
pub use fonts::FontRanks;
pub use grouping::{aggregate_paragraph, most_common, normalized_font_size, ParagraphGrouper};
pub use options::{AlignmentBounds, LayoutOptions};
