//! Paragraph-level types.

use serde::{Deserialize, Serialize};

use super::{Alignment, BBox, TextCase};

/// Hierarchy label assigned to a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Document title
    #[serde(rename = "title")]
    Title,
    /// Top-level heading
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
    /// Body text
    #[default]
    #[serde(rename = "p")]
    Paragraph,
}

impl Level {
    /// The heading level, if this is H1/H2/H3.
    pub fn heading(self) -> Option<HeadingLevel> {
        match self {
            Level::H1 => Some(HeadingLevel::H1),
            Level::H2 => Some(HeadingLevel::H2),
            Level::H3 => Some(HeadingLevel::H3),
            Level::Title | Level::Paragraph => None,
        }
    }

    /// Check if this is an H1/H2/H3 label.
    pub fn is_heading(self) -> bool {
        self.heading().is_some()
    }

    /// Wire name ("title", "H1", ..., "p").
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Title => "title",
            Level::H1 => "H1",
            Level::H2 => "H2",
            Level::H3 => "H3",
            Level::Paragraph => "p",
        }
    }
}

impl From<HeadingLevel> for Level {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => Level::H1,
            HeadingLevel::H2 => Level::H2,
            HeadingLevel::H3 => Level::H3,
        }
    }
}

/// Heading depth emitted in the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Level 1
    H1,
    /// Level 2
    H2,
    /// Level 3
    H3,
}

/// A paragraph aggregated from one or more consecutive lines on one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphRecord {
    /// Space-joined line texts
    pub text: String,
    /// Mean line font size, rounded to 2 decimals
    pub avg_font_size: f32,
    /// Font size snapped to 0.5pt classes
    pub normalized_font_size: f32,
    /// Population variance of the line font sizes
    pub font_size_variance: f32,
    /// Union of line boxes
    pub bbox: BBox,
    /// True only if every line is bold
    pub is_bold: bool,
    /// Fraction of bold lines
    pub bold_ratio: f32,
    /// Most frequent line alignment
    pub alignment: Alignment,
    /// Most frequent line case
    pub text_case: TextCase,
    /// Union of line font names, first-seen order
    pub font_names: Vec<String>,
    /// Number of lines
    pub line_count: usize,
    /// Mean line box height
    pub avg_line_height: f32,
    /// Mean line height / font size
    pub avg_height_to_font_ratio: f32,
    /// Mean positive gap between consecutive lines
    pub line_spacing_avg: f32,
    /// Page of the first line
    pub page_num: u32,
    /// Font size variance below 0.1
    pub is_homogeneous: bool,
    /// Document-relative font rank (0 = smallest)
    pub relative_font_size: u32,
    /// Hierarchy label, set by the labeler
    pub level: Option<Level>,
}

impl ParagraphRecord {
    /// Trimmed text.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// First font name, lowercased, or empty.
    pub fn primary_font_name(&self) -> String {
        self.font_names
            .first()
            .map(|name| name.to_lowercase())
            .unwrap_or_default()
    }

    /// First font name with subset prefix and style suffix removed.
    ///
    /// `"ABCDEF+Helvetica-Bold"` becomes `"Helvetica"`.
    pub fn primary_font_family(&self) -> String {
        let Some(name) = self.font_names.first() else {
            return String::new();
        };
        let name = match name.split_once('+') {
            Some((prefix, rest)) if prefix.len() == 6 => rest,
            _ => name.as_str(),
        };
        name.split(['-', ','])
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// The label, defaulting to body text when unlabeled.
    pub fn level_or_default(&self) -> Level {
        self.level.unwrap_or_default()
    }
}
