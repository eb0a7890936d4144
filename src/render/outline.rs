//! Projection of labeled paragraphs onto the outline schema.

use crate::model::{DocumentOutline, Level, OutlineEntry, ParagraphRecord};

/// Build the outline from labeled paragraphs.
///
/// The title is the first `title` paragraph's trimmed text (empty if none);
/// every H1/H2/H3 paragraph with non-empty text becomes one entry, in
/// document order. Nothing is reordered or de-duplicated.
pub fn project(paragraphs: &[ParagraphRecord]) -> DocumentOutline {
    let title = paragraphs
        .iter()
        .find(|p| p.level == Some(Level::Title))
        .map(|p| p.trimmed_text().to_string())
        .unwrap_or_default();

    let outline = paragraphs
        .iter()
        .filter_map(|p| {
            let level = p.level?.heading()?;
            let text = p.trimmed_text();
            if text.is_empty() {
                return None;
            }
            Some(OutlineEntry::new(level, text, p.page_num))
        })
        .collect();

    DocumentOutline { title, outline }
}
