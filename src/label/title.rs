//! Title detection on the first page.

use crate::model::{BBox, Level, ParagraphRecord};

/// Title text must be longer than this many chars.
const MIN_TITLE_CHARS: usize = 5;
/// Title text must be shorter than this many chars.
const MAX_TITLE_CHARS: usize = 200;

/// A detected title: the synthetic paragraph and the paragraphs it absorbs.
#[derive(Debug, Clone)]
pub struct TitleCandidate {
    /// Merged title paragraph, labeled `title`
    pub paragraph: ParagraphRecord,
    /// Indices of the merged paragraphs, in document order
    pub members: Vec<usize>,
    /// Font rank shared by all members
    pub rank: u32,
    /// Page the title was searched on
    pub page: u32,
}

/// Find the document title among the paragraphs on the lowest page.
///
/// Candidates have a positive font rank, a reasonable length, and are not
/// bare numbers. The candidates at the highest rank are clustered by
/// (rank, primary font family, bold) and the largest cluster (first found
/// on ties) is merged into one paragraph.
pub fn detect_title(paragraphs: &[ParagraphRecord]) -> Option<TitleCandidate> {
    let page = paragraphs.iter().map(|p| p.page_num).min()?;

    let candidates: Vec<usize> = paragraphs
        .iter()
        .enumerate()
        .filter(|(_, p)| p.page_num == page && is_title_candidate(p))
        .map(|(i, _)| i)
        .collect();

    let rank = candidates
        .iter()
        .map(|&i| paragraphs[i].relative_font_size)
        .max()?;

    let mut clusters: Vec<((u32, String, bool), Vec<usize>)> = Vec::new();
    for &i in &candidates {
        let p = &paragraphs[i];
        if p.relative_font_size != rank {
            continue;
        }
        let key = (p.relative_font_size, p.primary_font_family(), p.is_bold);
        match clusters.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(i),
            None => clusters.push((key, vec![i])),
        }
    }

    let mut best: Option<Vec<usize>> = None;
    for (_, members) in clusters {
        if best.as_ref().map_or(true, |b| members.len() > b.len()) {
            best = Some(members);
        }
    }
    let members = best?;

    let text = members
        .iter()
        .map(|&i| paragraphs[i].trimmed_text())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut paragraph = paragraphs[members[0]].clone();
    paragraph.text = text;
    paragraph.bbox = BBox::mean(members.iter().map(|&i| &paragraphs[i].bbox));
    paragraph.level = Some(Level::Title);

    Some(TitleCandidate {
        paragraph,
        members,
        rank,
        page,
    })
}

fn is_title_candidate(p: &ParagraphRecord) -> bool {
    let text = p.trimmed_text();
    let len = text.chars().count();

    p.relative_font_size > 0
        && len > MIN_TITLE_CHARS
        && len < MAX_TITLE_CHARS
        && !text.chars().all(char::is_numeric)
}
