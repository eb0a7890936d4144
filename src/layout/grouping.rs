//! Paragraph grouping.
//!
//! Lines of one page are scanned top to bottom and merged into the open
//! paragraph while they stay close, keep the same size class and weight,
//! and share a typeface. Everything downstream reasons about paragraphs.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::model::{LineRecord, ParagraphRecord};

use super::fonts::round2;
use super::LayoutOptions;

/// Font-size variance below which a paragraph counts as homogeneous.
const HOMOGENEOUS_VARIANCE: f32 = 0.1;

/// Snap a font size to the nearest 0.5pt class.
pub fn normalized_font_size(size: f32) -> f32 {
    (size * 2.0).round() / 2.0
}

/// Groups line records into paragraphs.
#[derive(Debug, Clone, Default)]
pub struct ParagraphGrouper {
    options: LayoutOptions,
}

impl ParagraphGrouper {
    /// Create a grouper with the given options.
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Group the lines of a whole document.
    ///
    /// Lines are bucketed by page, each page is grouped on its own (in
    /// parallel unless disabled), and the pages are concatenated in
    /// ascending page order.
    pub fn group_document(&self, lines: &[LineRecord]) -> Vec<ParagraphRecord> {
        let mut pages: BTreeMap<u32, Vec<&LineRecord>> = BTreeMap::new();
        for line in lines {
            pages.entry(line.page_num).or_default().push(line);
        }
        let pages: Vec<Vec<&LineRecord>> = pages.into_values().collect();

        let grouped: Vec<Vec<ParagraphRecord>> = if self.options.parallel && pages.len() > 1 {
            pages
                .into_par_iter()
                .map(|page| self.group_sorted(page))
                .collect()
        } else {
            pages
                .into_iter()
                .map(|page| self.group_sorted(page))
                .collect()
        };

        let paragraphs: Vec<ParagraphRecord> = grouped.into_iter().flatten().collect();
        log::debug!(
            "Grouped {} lines into {} paragraphs",
            lines.len(),
            paragraphs.len()
        );
        paragraphs
    }

    /// Group the lines of a single page.
    pub fn group_page(&self, lines: &[LineRecord]) -> Vec<ParagraphRecord> {
        self.group_sorted(lines.iter().collect())
    }

    fn group_sorted(&self, mut lines: Vec<&LineRecord>) -> Vec<ParagraphRecord> {
        // Stable: lines on the same baseline keep extractor order
        lines.sort_by(|a, b| a.bbox.y0.total_cmp(&b.bbox.y0));

        let mut iter = lines.into_iter();
        let Some(first) = iter.next() else {
            return vec![];
        };

        let mut paragraphs = Vec::new();
        let mut open: Vec<&LineRecord> = vec![first];

        for curr in iter {
            let prev = open[open.len() - 1];
            if self.should_merge(prev, curr) {
                open.push(curr);
            } else {
                paragraphs.extend(aggregate_paragraph(&open));
                open.clear();
                open.push(curr);
            }
        }
        paragraphs.extend(aggregate_paragraph(&open));

        paragraphs
    }

    /// Whether `curr` continues the paragraph whose last line is `prev`.
    pub fn should_merge(&self, prev: &LineRecord, curr: &LineRecord) -> bool {
        let spacing = (curr.bbox.y0 - prev.bbox.y1).max(0.0);

        prev.page_num == curr.page_num
            && spacing < self.options.vertical_spacing_threshold
            && normalized_font_size(prev.font_size) == normalized_font_size(curr.font_size)
            && prev.is_bold == curr.is_bold
            && prev.shares_font_with(curr)
    }
}

/// Aggregate consecutive lines into one paragraph.
///
/// Returns `None` when the combined text is empty.
pub fn aggregate_paragraph(lines: &[&LineRecord]) -> Option<ParagraphRecord> {
    let text = lines
        .iter()
        .map(|l| l.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        return None;
    }

    let sizes: Vec<f32> = lines.iter().map(|l| l.font_size).collect();
    let avg_font_size = round2(mean(&sizes));
    let font_size_variance = variance(&sizes);

    let bbox = lines
        .iter()
        .skip(1)
        .fold(lines[0].bbox, |acc, l| acc.union(&l.bbox));

    let bold_count = lines.iter().filter(|l| l.is_bold).count();

    let mut font_names: Vec<String> = Vec::new();
    for name in lines.iter().flat_map(|l| l.font_names.iter()) {
        if !font_names.contains(name) {
            font_names.push(name.clone());
        }
    }

    let heights: Vec<f32> = lines.iter().map(|l| l.bbox.height()).collect();
    let ratios: Vec<f32> = lines
        .iter()
        .filter(|l| l.font_size > 0.0)
        .map(|l| l.bbox.height() / l.font_size)
        .collect();
    let spacings: Vec<f32> = lines
        .windows(2)
        .map(|w| w[1].bbox.y0 - w[0].bbox.y1)
        .filter(|s| *s > 0.0)
        .collect();

    Some(ParagraphRecord {
        text,
        avg_font_size,
        normalized_font_size: normalized_font_size(avg_font_size),
        font_size_variance,
        bbox,
        is_bold: bold_count == lines.len(),
        bold_ratio: bold_count as f32 / lines.len() as f32,
        alignment: most_common(lines.iter().map(|l| l.alignment)).unwrap_or_default(),
        text_case: most_common(lines.iter().map(|l| l.text_case)).unwrap_or_default(),
        font_names,
        line_count: lines.len(),
        avg_line_height: mean(&heights),
        avg_height_to_font_ratio: mean(&ratios),
        line_spacing_avg: round2(mean(&spacings)),
        page_num: lines[0].page_num,
        is_homogeneous: font_size_variance < HOMOGENEOUS_VARIANCE,
        relative_font_size: 0,
        level: None,
    })
}

/// Most frequent value; the first value reaching the top count wins ties.
pub fn most_common<T, I>(values: I) -> Option<T>
where
    T: PartialEq + Copy,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

fn variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / values.len() as f32
}
