//! Structure labeling: title, thresholds, scoring, lookahead and repair.

use serde::Serialize;

use crate::model::{Level, ParagraphRecord};

use super::repair::repair_hierarchy;
use super::scoring::{assign_level, header_score, is_never_heading};
use super::title::detect_title;
use super::{LabelOptions, Thresholds};

/// Diagnostics of one labeling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelReport {
    /// Page the title was searched on
    pub title_page: Option<u32>,
    /// Detected title text
    pub title: Option<String>,
    /// Paragraphs merged into the title
    pub title_members: usize,
    /// Derived heading thresholds
    pub thresholds: Option<Thresholds>,
    /// Body paragraphs promoted to H3 by lookahead
    pub promoted: usize,
    /// Levels rewritten by hierarchy repair
    pub repaired: usize,
    /// True when no positive font rank existed and scoring was skipped
    pub scoring_skipped: bool,
}

/// Labeled paragraphs with the run's diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Labeling {
    /// Paragraphs in document order, every one with a level
    pub paragraphs: Vec<ParagraphRecord>,
    /// Diagnostics
    pub report: LabelReport,
}

/// First-pass decision for one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Title,
    /// Scored; body paragraphs here may still be promoted
    Scored(Level),
    /// Forced body text, never promoted
    Suppressed,
}

impl Decision {
    fn level(self) -> Level {
        match self {
            Decision::Title => Level::Title,
            Decision::Scored(level) => level,
            Decision::Suppressed => Level::Paragraph,
        }
    }
}

/// Assigns title/H1/H2/H3/p labels to a document's paragraphs.
#[derive(Debug, Clone, Default)]
pub struct StructureLabeler {
    options: LabelOptions,
}

impl StructureLabeler {
    /// Create a labeler with the given options.
    pub fn new(options: LabelOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &LabelOptions {
        &self.options
    }

    /// Label all paragraphs of a document, given in document order with
    /// their font ranks already set.
    ///
    /// A detected multi-paragraph title replaces its members with a single
    /// merged paragraph at the position of the first member.
    pub fn label(&self, paragraphs: Vec<ParagraphRecord>) -> Labeling {
        let mut report = LabelReport::default();
        if paragraphs.is_empty() {
            return Labeling {
                paragraphs,
                report,
            };
        }

        let title = detect_title(&paragraphs);
        let mut title_index = None;
        let mut title_scope = None;

        let mut paragraphs = match title {
            Some(title) => {
                log::debug!(
                    "Title detected on page {}: {:?}",
                    title.page,
                    title.paragraph.text
                );
                report.title_page = Some(title.page);
                report.title = Some(title.paragraph.text.clone());
                report.title_members = title.members.len();
                title_index = Some(title.members[0]);
                title_scope = Some((title.page, title.rank));
                merge_title(paragraphs, title.paragraph, &title.members)
            }
            None => {
                report.title_page = paragraphs.iter().map(|p| p.page_num).min();
                paragraphs
            }
        };

        let ranks: Vec<u32> = paragraphs
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != title_index)
            .map(|(_, p)| p.relative_font_size)
            .collect();

        let Some(thresholds) = Thresholds::derive(&ranks) else {
            log::debug!("No positive font ranks; labeling every paragraph as body text");
            report.scoring_skipped = true;
            for (i, p) in paragraphs.iter_mut().enumerate() {
                p.level = Some(if Some(i) == title_index {
                    Level::Title
                } else {
                    Level::Paragraph
                });
            }
            return Labeling {
                paragraphs,
                report,
            };
        };
        log::debug!(
            "Font rank thresholds - H1: {}, H2: {}, H3: {}",
            thresholds.h1,
            thresholds.h2,
            thresholds.h3
        );
        report.thresholds = Some(thresholds);

        let decisions: Vec<Decision> = paragraphs
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if Some(i) == title_index {
                    return Decision::Title;
                }
                if let Some((page, rank)) = title_scope {
                    if p.page_num == page && p.relative_font_size < rank {
                        return Decision::Suppressed;
                    }
                }
                if is_never_heading(&p.text, self.options.max_heading_chars) {
                    return Decision::Suppressed;
                }
                let score = header_score(p, &thresholds, &self.options);
                let by_size = thresholds.level_for(p.relative_font_size as f32);
                Decision::Scored(assign_level(score, by_size, p.is_bold, &self.options.bands))
            })
            .collect();

        let mut levels: Vec<Level> = decisions.iter().map(|d| d.level()).collect();

        // Lookahead: bold lead-in lines directly followed by body text
        for (i, window) in decisions.windows(2).enumerate() {
            let p = &paragraphs[i];
            if window[0] == Decision::Scored(Level::Paragraph)
                && window[1].level() == Level::Paragraph
                && p.is_bold
                && p.relative_font_size > 0
                && p.relative_font_size as f32 >= thresholds.h3
            {
                levels[i] = Level::H3;
                report.promoted += 1;
            }
        }

        report.repaired = repair_hierarchy(levels.iter_mut());

        for (p, level) in paragraphs.iter_mut().zip(levels) {
            p.level = Some(level);
        }

        log::debug!(
            "Labeled {} paragraphs ({} promoted, {} repaired)",
            paragraphs.len(),
            report.promoted,
            report.repaired
        );

        Labeling {
            paragraphs,
            report,
        }
    }
}

/// Put the merged title at the first member's position and drop the rest.
fn merge_title(
    paragraphs: Vec<ParagraphRecord>,
    title: ParagraphRecord,
    members: &[usize],
) -> Vec<ParagraphRecord> {
    let first = members[0];
    let mut title = Some(title);
    paragraphs
        .into_iter()
        .enumerate()
        .filter_map(|(i, p)| {
            if i == first {
                title.take()
            } else if members.contains(&i) {
                None
            } else {
                Some(p)
            }
        })
        .collect()
}
