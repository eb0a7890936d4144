//! Line-level input types.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in rendering coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box height (never negative).
    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).max(0.0)
    }

    /// Coordinate-wise min/max union of two boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Coordinate-wise mean of a set of boxes. Empty input gives the zero box.
    pub fn mean<'a>(boxes: impl IntoIterator<Item = &'a BBox>) -> BBox {
        let mut sum = [0.0f32; 4];
        let mut count = 0usize;
        for b in boxes {
            sum[0] += b.x0;
            sum[1] += b.y0;
            sum[2] += b.x1;
            sum[3] += b.y1;
            count += 1;
        }
        if count == 0 {
            return BBox::default();
        }
        let n = count as f32;
        BBox::new(sum[0] / n, sum[1] / n, sum[2] / n, sum[3] / n)
    }
}

impl From<[f32; 4]> for BBox {
    fn from(v: [f32; 4]) -> Self {
        BBox::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BBox> for [f32; 4] {
    fn from(b: BBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}

/// Horizontal alignment of a line on its page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
    /// Could not be determined
    #[default]
    #[serde(other)]
    Unknown,
}

/// Letter case of a line or paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextCase {
    /// ALL CAPS
    #[serde(rename = "UPPER")]
    Upper,
    /// all lowercase
    #[serde(rename = "lower")]
    Lower,
    /// Every Word Capitalized
    Title,
    /// Anything else, including text without cased letters
    #[default]
    #[serde(other)]
    Mixed,
}

/// One line of text as reported by the external extractor.
///
/// Every field defaults when missing so that partial records degrade
/// instead of failing the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineRecord {
    /// Line text
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Bounding box
    pub bbox: BBox,
    /// Whether the line is set in a bold face
    pub is_bold: bool,
    /// Distinct font names used on the line, first-seen order
    pub font_names: Vec<String>,
    /// Horizontal alignment
    pub alignment: Alignment,
    /// Letter case
    pub text_case: TextCase,
    /// Page number (0 or 1 based, as the extractor reports it)
    pub page_num: u32,
}

impl LineRecord {
    /// Create a line with text, size and box; remaining fields take defaults.
    pub fn new(text: impl Into<String>, font_size: f32, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            font_size,
            bbox,
            ..Default::default()
        }
    }

    /// Set the page number.
    pub fn on_page(mut self, page_num: u32) -> Self {
        self.page_num = page_num;
        self
    }

    /// Mark the line bold or regular.
    pub fn bold(mut self, is_bold: bool) -> Self {
        self.is_bold = is_bold;
        self
    }

    /// Add a font name (ignored if already present).
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.font_names.contains(&name) {
            self.font_names.push(name);
        }
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the text case.
    pub fn with_case(mut self, text_case: TextCase) -> Self {
        self.text_case = text_case;
        self
    }

    /// Whether two lines share at least one font name.
    pub fn shares_font_with(&self, other: &LineRecord) -> bool {
        self.font_names
            .iter()
            .any(|name| other.font_names.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_union_and_mean() {
        let a = BBox::new(10.0, 20.0, 100.0, 30.0);
        let b = BBox::new(5.0, 32.0, 90.0, 44.0);

        assert_eq!(a.union(&b), BBox::new(5.0, 20.0, 100.0, 44.0));
        assert_eq!(BBox::mean([&a, &b]), BBox::new(7.5, 26.0, 95.0, 37.0));
        assert_eq!(BBox::mean(std::iter::empty()), BBox::default());
    }

    #[test]
    fn test_line_record_defaults_from_partial_json() {
        let line: LineRecord =
            serde_json::from_str(r#"{"text": "Hello", "bbox": [1, 2, 3, 4]}"#).unwrap();

        assert_eq!(line.text, "Hello");
        assert_eq!(line.bbox, BBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(line.font_size, 0.0);
        assert_eq!(line.alignment, Alignment::Unknown);
        assert_eq!(line.text_case, TextCase::Mixed);
        assert!(line.font_names.is_empty());
    }

    #[test]
    fn test_enum_wire_names() {
        let line: LineRecord = serde_json::from_str(
            r#"{"alignment": "center", "text_case": "UPPER", "is_bold": true}"#,
        )
        .unwrap();
        assert_eq!(line.alignment, Alignment::Center);
        assert_eq!(line.text_case, TextCase::Upper);

        let odd: LineRecord =
            serde_json::from_str(r#"{"alignment": "justify", "text_case": "weird"}"#).unwrap();
        assert_eq!(odd.alignment, Alignment::Unknown);
        assert_eq!(odd.text_case, TextCase::Mixed);
    }

    #[test]
    fn test_shares_font_with() {
        let a = LineRecord::default().with_font("Arial").with_font("Arial-Bold");
        let b = LineRecord::default().with_font("Arial-Bold");
        let c = LineRecord::default().with_font("Times");

        assert!(a.shares_font_with(&b));
        assert!(!a.shares_font_with(&c));
        assert!(!LineRecord::default().shares_font_with(&a));
    }
}
