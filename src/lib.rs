//! # docoutline
//!
//! Document outline extraction from positioned text lines.
//!
//! This library takes the line records an external PDF renderer reports
//! (text, bounding box, font size, weight, alignment) and turns them into a
//! title plus an ordered H1/H2/H3 outline.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docoutline::{io, Outliner};
//!
//! fn main() -> docoutline::Result<()> {
//!     // Load line records written by an extractor
//!     let lines = io::load_lines("lines.json")?;
//!
//!     // Group, label and project
//!     let outline = Outliner::new().outline(&lines);
//!     println!("{}", io::to_json(&outline, io::JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Paragraph grouping**: strict adjacency rule per page, pages in parallel
//! - **Font ranking**: document-relative ordinal rank of every font size
//! - **Structure labeling**: title, thresholds, header scoring, lookahead
//! - **Hierarchy repair**: no heading skips a depth
//! - **Projection**: `{"title": ..., "outline": [{level, text, page}]}`

pub mod error;
pub mod io;
pub mod label;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use label::{LabelOptions, LabelReport, ScoreBands, ScoreWeights, StructureLabeler};
pub use layout::{AlignmentBounds, FontRanks, LayoutOptions, ParagraphGrouper};
pub use model::{
    Alignment, BBox, DocumentOutline, HeadingLevel, Level, LineRecord, OutlineEntry,
    ParagraphRecord, TextCase,
};
pub use render::JsonFormat;

/// Extract the outline of a document with default options.
///
/// # Example
///
/// ```
/// use docoutline::{extract_outline, BBox, LineRecord};
///
/// let lines = vec![
///     LineRecord::new("Annual Report", 24.0, BBox::new(50.0, 40.0, 400.0, 70.0)),
///     LineRecord::new("Some body text.", 10.0, BBox::new(50.0, 120.0, 400.0, 132.0)),
/// ];
/// let outline = extract_outline(&lines);
/// assert_eq!(outline.title, "Annual Report");
/// ```
pub fn extract_outline(lines: &[LineRecord]) -> DocumentOutline {
    Outliner::new().outline(lines)
}

/// Run the full pipeline with default options and keep the intermediate
/// paragraphs and diagnostics.
pub fn analyze(lines: &[LineRecord]) -> Analysis {
    Outliner::new().analyze(lines)
}

/// Builder bundling layout and labeling options.
///
/// # Example
///
/// ```
/// use docoutline::{AlignmentBounds, Outliner};
///
/// let outline = Outliner::new()
///     .with_spacing_threshold(12.0)
///     .with_alignment_bounds(AlignmentBounds::relaxed())
///     .with_feature_derivation(Some(612.0))
///     .sequential()
///     .outline(&[]);
/// assert!(outline.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Outliner {
    layout_options: LayoutOptions,
    label_options: LabelOptions,
}

impl Outliner {
    /// Create a new outliner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the layout options.
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.layout_options = options;
        self
    }

    /// Replace the labeling options.
    pub fn with_label_options(mut self, options: LabelOptions) -> Self {
        self.label_options = options;
        self
    }

    /// Set the vertical spacing threshold for paragraph merging.
    pub fn with_spacing_threshold(mut self, threshold: f32) -> Self {
        self.layout_options = self.layout_options.with_spacing_threshold(threshold);
        self
    }

    /// Set the alignment classification bounds used by feature derivation.
    pub fn with_alignment_bounds(mut self, bounds: AlignmentBounds) -> Self {
        self.layout_options = self.layout_options.with_alignment_bounds(bounds);
        self
    }

    /// Recompute text case, and alignment when the page width is known,
    /// from every line before grouping.
    pub fn with_feature_derivation(mut self, page_width: Option<f32>) -> Self {
        self.layout_options = self.layout_options.with_feature_derivation(page_width);
        self
    }

    /// Disable parallel page grouping.
    pub fn sequential(mut self) -> Self {
        self.layout_options = self.layout_options.sequential();
        self
    }

    /// The layout options in use.
    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout_options
    }

    /// The labeling options in use.
    pub fn label_options(&self) -> &LabelOptions {
        &self.label_options
    }

    /// Extract the outline of a document.
    pub fn outline(&self, lines: &[LineRecord]) -> DocumentOutline {
        self.analyze(lines).outline
    }

    /// Run the full pipeline and keep the labeled paragraphs and report.
    pub fn analyze(&self, lines: &[LineRecord]) -> Analysis {
        let lines = layout::derive_document_features(lines, &self.layout_options);
        let lines: &[LineRecord] = &lines;

        let grouper = ParagraphGrouper::new(self.layout_options.clone());
        let mut paragraphs = grouper.group_document(lines);
        if paragraphs.is_empty() && !lines.is_empty() {
            log::warn!("{} lines produced no paragraphs (all blank)", lines.len());
        }

        let ranks = FontRanks::from_sizes(
            lines
                .iter()
                .filter(|line| !line.text.trim().is_empty())
                .map(|line| line.font_size),
        );
        log::debug!("{} distinct font sizes", ranks.len());
        for paragraph in &mut paragraphs {
            paragraph.relative_font_size = ranks.rank(paragraph.avg_font_size);
        }

        let labeler = StructureLabeler::new(self.label_options.clone());
        let labeling = labeler.label(paragraphs);
        let outline = render::project(&labeling.paragraphs);

        Analysis {
            paragraphs: labeling.paragraphs,
            outline,
            report: labeling.report,
        }
    }
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Labeled paragraphs in document order
    pub paragraphs: Vec<ParagraphRecord>,
    /// The projected outline
    pub outline: DocumentOutline,
    /// Labeling diagnostics
    pub report: LabelReport,
}

impl Analysis {
    /// Convert the outline to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.outline, format)
    }

    /// Convert the labeled paragraphs to JSON.
    pub fn paragraphs_to_json(&self, format: JsonFormat) -> Result<String> {
        render::paragraphs_to_json(&self.paragraphs, format)
    }
}
