//! Derivation of line features the extractor may leave unset.

use std::borrow::Cow;

use crate::model::{Alignment, BBox, LineRecord, TextCase};

use super::{AlignmentBounds, LayoutOptions};

/// Classify the letter case of a piece of text.
///
/// Characters without case (digits, punctuation) are ignored; text with no
/// cased letters at all is `Mixed`.
pub fn detect_text_case(text: &str) -> TextCase {
    let mut has_upper = false;
    let mut has_lower = false;
    for c in text.chars() {
        has_upper |= c.is_uppercase();
        has_lower |= c.is_lowercase();
    }

    match (has_upper, has_lower) {
        (true, false) => TextCase::Upper,
        (false, true) => TextCase::Lower,
        (true, true) if is_title_case(text) => TextCase::Title,
        _ => TextCase::Mixed,
    }
}

/// Uppercase letters may only follow uncased characters and lowercase
/// letters only cased ones.
fn is_title_case(text: &str) -> bool {
    let mut prev_cased = false;
    let mut seen_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else {
            prev_cased = false;
        }
    }
    seen_cased
}

/// Classify horizontal alignment from a line box and the page width.
pub fn detect_alignment(bbox: &BBox, page_width: f32, bounds: &AlignmentBounds) -> Alignment {
    if page_width <= 0.0 || bbox.x1 <= bbox.x0 {
        return Alignment::Unknown;
    }

    let start = bbox.x0 / page_width;
    let mid = (bbox.x0 + bbox.x1) / 2.0 / page_width;

    if start < bounds.left_max {
        Alignment::Left
    } else if start >= bounds.right_min {
        Alignment::Right
    } else if mid >= bounds.center_min && mid <= bounds.center_max {
        Alignment::Center
    } else {
        Alignment::Unknown
    }
}

/// Recompute `text_case` from the text and, when a page width is known,
/// `alignment` from the box.
pub fn derive_features(
    mut line: LineRecord,
    page_width: Option<f32>,
    bounds: &AlignmentBounds,
) -> LineRecord {
    line.text_case = detect_text_case(line.text.trim());
    if let Some(width) = page_width {
        line.alignment = detect_alignment(&line.bbox, width, bounds);
    }
    line
}

/// Apply [`derive_features`] to every line when the options enable it;
/// otherwise the lines are borrowed unchanged.
pub fn derive_document_features<'a>(
    lines: &'a [LineRecord],
    options: &LayoutOptions,
) -> Cow<'a, [LineRecord]> {
    if !options.derive_features {
        return Cow::Borrowed(lines);
    }
    Cow::Owned(
        lines
            .iter()
            .cloned()
            .map(|line| derive_features(line, options.page_width, &options.alignment))
            .collect(),
    )
}
