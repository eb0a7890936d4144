//! Document outline output types.

use serde::{Deserialize, Serialize};

use super::HeadingLevel;

/// The extracted outline: a title and a flat, ordered list of headings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title (empty if none was detected)
    pub title: String,

    /// Headings in document order
    pub outline: Vec<OutlineEntry>,
}

impl DocumentOutline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there is neither a title nor any heading.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }

    /// Number of headings at the given level.
    pub fn count(&self, level: HeadingLevel) -> usize {
        self.outline.iter().filter(|e| e.level == level).count()
    }
}

/// One heading in the outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading depth
    pub level: HeadingLevel,
    /// Heading text
    pub text: String,
    /// Page the heading starts on
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}
