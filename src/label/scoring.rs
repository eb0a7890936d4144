//! Header scoring and score-band level assignment.

use crate::model::{Alignment, HeadingLevel, Level, ParagraphRecord, TextCase};

use super::{LabelOptions, ScoreBands, Thresholds};

/// Paragraphs this short with no letters (page numbers, bullets) are body text.
const MAX_NUMERIC_CHARS: usize = 3;

/// Whether the text alone rules a paragraph out as a heading.
pub fn is_never_heading(text: &str, max_heading_chars: usize) -> bool {
    let text = text.trim();
    let len = text.chars().count();

    let numeric_or_symbol = !text.is_empty() && text.chars().all(char::is_numeric)
        || !text.chars().any(char::is_alphabetic);

    (len <= MAX_NUMERIC_CHARS && numeric_or_symbol) || len > max_heading_chars
}

/// Additive estimate of how heading-like a paragraph is.
pub fn header_score(p: &ParagraphRecord, thresholds: &Thresholds, options: &LabelOptions) -> f32 {
    let w = &options.weights;
    let mut score = p.relative_font_size as f32 / thresholds.max() * w.font_size_ratio;

    if p.is_bold {
        score += w.bold;
    }
    score += p.bold_ratio * w.bold_ratio;

    let font = p.primary_font_name();
    let bold_family = options
        .bold_font_keywords
        .iter()
        .any(|k| font.contains(k.as_str()));
    if bold_family {
        score += w.bold_family;
    } else if font.contains("arial") || font.contains("helvetica") {
        score += w.common_family;
    }

    if p.avg_line_height > 0.0 && w.line_height_unit > 0.0 {
        score += (p.avg_line_height / w.line_height_unit).min(1.0) * w.line_height;
    }

    score += match p.text_case {
        TextCase::Upper => w.upper_case,
        TextCase::Title => w.title_case,
        TextCase::Lower | TextCase::Mixed => 0.0,
    };

    score += match p.alignment {
        Alignment::Center => w.center,
        Alignment::Left => w.left,
        Alignment::Right | Alignment::Unknown => 0.0,
    };

    let top = p.bbox.y0;
    if top < w.top_band_limit {
        score += w.top_band;
    } else if top < w.upper_band_limit {
        score += w.upper_band;
    }

    score
}

/// Score band of a header score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Size threshold decides; very high scores become H3 regardless
    Strong,
    /// Size threshold decides; bold high-moderate scores become H3
    Moderate,
    /// Needs both a size threshold and bold
    Weak,
    /// Always body text
    Low,
}

impl ScoreBand {
    /// Band containing a score.
    pub fn of(score: f32, bands: &ScoreBands) -> Self {
        if score >= bands.strong {
            ScoreBand::Strong
        } else if score >= bands.moderate {
            ScoreBand::Moderate
        } else if score >= bands.weak {
            ScoreBand::Weak
        } else {
            ScoreBand::Low
        }
    }
}

/// Assign a level from the score band and the threshold ladder.
pub fn assign_level(
    score: f32,
    by_size: Option<HeadingLevel>,
    is_bold: bool,
    bands: &ScoreBands,
) -> Level {
    let fallback_h3 = match ScoreBand::of(score, bands) {
        ScoreBand::Strong => score >= bands.strong_fallback,
        ScoreBand::Moderate => score >= bands.moderate_fallback && is_bold,
        ScoreBand::Weak => {
            return match by_size {
                Some(level) if is_bold => level.into(),
                _ => Level::Paragraph,
            }
        }
        ScoreBand::Low => return Level::Paragraph,
    };

    match by_size {
        Some(level) => level.into(),
        None if fallback_h3 => Level::H3,
        None => Level::Paragraph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BBox;

    fn thresholds() -> Thresholds {
        Thresholds {
            h1: 4.0,
            h2: 3.0,
            h3: 2.0,
        }
    }

    #[test]
    fn test_is_never_heading() {
        assert!(is_never_heading("7", 350));
        assert!(is_never_heading(" 12 ", 350));
        assert!(is_never_heading("--", 350));
        assert!(is_never_heading("", 350));
        assert!(!is_never_heading("A1", 350));
        assert!(!is_never_heading("1234", 350));
        assert!(!is_never_heading("Introduction", 350));
        assert!(is_never_heading(&"a".repeat(351), 350));
        assert!(!is_never_heading(&"a".repeat(350), 350));
    }

    #[test]
    fn test_header_score_components() {
        let p = ParagraphRecord {
            text: "Introduction".to_string(),
            relative_font_size: 4,
            is_bold: true,
            bold_ratio: 1.0,
            font_names: vec!["Arial-BoldMT".to_string()],
            avg_line_height: 30.0,
            text_case: TextCase::Title,
            alignment: Alignment::Left,
            bbox: BBox::new(72.0, 100.0, 300.0, 130.0),
            ..Default::default()
        };
        // 30 + 25 + 20 + 15 + 10 + 8 + 7 + 7
        let score = header_score(&p, &thresholds(), &LabelOptions::default());
        assert!((score - 122.0).abs() < 1e-4);
    }

    #[test]
    fn test_header_score_plain_body() {
        let p = ParagraphRecord {
            text: "just some text in the body".to_string(),
            relative_font_size: 1,
            font_names: vec!["Times-Roman".to_string()],
            avg_line_height: 10.0,
            text_case: TextCase::Mixed,
            alignment: Alignment::Unknown,
            bbox: BBox::new(72.0, 500.0, 300.0, 510.0),
            ..Default::default()
        };
        // 7.5 + 5
        let score = header_score(&p, &thresholds(), &LabelOptions::default());
        assert!((score - 12.5).abs() < 1e-4);
    }

    #[test]
    fn test_common_family_and_position_bands() {
        let p = ParagraphRecord {
            font_names: vec!["Helvetica".to_string()],
            bbox: BBox::new(0.0, 200.0, 10.0, 210.0),
            text_case: TextCase::Upper,
            alignment: Alignment::Center,
            ..Default::default()
        };
        // 5 + 10 + 10 + 5
        let score = header_score(&p, &thresholds(), &LabelOptions::default());
        assert!((score - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_family_keywords_are_configurable() {
        let p = ParagraphRecord {
            font_names: vec!["MyriadHeading".to_string()],
            bbox: BBox::new(0.0, 500.0, 10.0, 510.0),
            ..Default::default()
        };

        let default_score = header_score(&p, &thresholds(), &LabelOptions::default());
        assert!((default_score - 15.0).abs() < 1e-4);

        let options = LabelOptions::default().with_bold_keywords(["bold"]);
        assert_eq!(header_score(&p, &thresholds(), &options), 0.0);
    }

    #[test]
    fn test_score_bands() {
        let bands = ScoreBands::default();
        assert_eq!(ScoreBand::of(65.0, &bands), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(64.9, &bands), ScoreBand::Moderate);
        assert_eq!(ScoreBand::of(45.0, &bands), ScoreBand::Moderate);
        assert_eq!(ScoreBand::of(25.0, &bands), ScoreBand::Weak);
        assert_eq!(ScoreBand::of(24.9, &bands), ScoreBand::Low);
    }

    #[test]
    fn test_assign_level_strong() {
        let bands = ScoreBands::default();
        assert_eq!(assign_level(70.0, Some(HeadingLevel::H2), false, &bands), Level::H2);
        assert_eq!(assign_level(80.0, None, false, &bands), Level::H3);
        assert_eq!(assign_level(70.0, None, true, &bands), Level::Paragraph);
    }

    #[test]
    fn test_assign_level_moderate() {
        let bands = ScoreBands::default();
        assert_eq!(assign_level(50.0, Some(HeadingLevel::H1), false, &bands), Level::H1);
        assert_eq!(assign_level(56.0, None, true, &bands), Level::H3);
        assert_eq!(assign_level(56.0, None, false, &bands), Level::Paragraph);
        assert_eq!(assign_level(50.0, None, true, &bands), Level::Paragraph);
    }

    #[test]
    fn test_assign_level_weak_and_low() {
        let bands = ScoreBands::default();
        assert_eq!(assign_level(30.0, Some(HeadingLevel::H3), true, &bands), Level::H3);
        assert_eq!(assign_level(30.0, Some(HeadingLevel::H1), false, &bands), Level::Paragraph);
        assert_eq!(assign_level(30.0, None, true, &bands), Level::Paragraph);
        assert_eq!(assign_level(10.0, Some(HeadingLevel::H1), true, &bands), Level::Paragraph);
    }
}
