//! Integration tests for the grouping, labeling and projection pipeline.

use std::fs;

use docoutline::label::{header_score, repair_hierarchy, Thresholds};
use docoutline::{
    analyze, extract_outline, io, Alignment, BBox, HeadingLevel, JsonFormat, LabelOptions, Level,
    LineRecord, OutlineEntry, Outliner, ParagraphGrouper,
};
use tempfile::tempdir;

fn line(text: &str, size: f32, y0: f32, page: u32, font: &str) -> LineRecord {
    LineRecord::new(text, size, BBox::new(60.0, y0, 480.0, y0 + size))
        .on_page(page)
        .with_font(font)
        .with_alignment(Alignment::Left)
}

fn heading(text: &str, size: f32, y0: f32, page: u32) -> LineRecord {
    line(text, size, y0, page, "Helvetica-Bold").bold(true)
}

fn body(text: &str, y0: f32, page: u32) -> LineRecord {
    line(text, 10.0, y0, page, "Times-Roman")
}

/// A three-page report: title, two chapters and one section.
fn report() -> Vec<LineRecord> {
    vec![
        heading("Annual Report 2024", 24.0, 60.0, 1).with_alignment(Alignment::Center),
        body("This report summarizes", 120.0, 1),
        body("the year in review.", 132.0, 1),
        heading("1. Introduction", 18.0, 50.0, 2),
        body("We start with some context", 90.0, 2),
        body("about the organisation.", 102.0, 2),
        heading("1.1 Background", 14.0, 140.0, 2),
        body("History of the project.", 170.0, 2),
        heading("2. Results", 18.0, 50.0, 3),
        body("Numbers went up.", 90.0, 3),
    ]
}

/// A larger synthetic document for property checks.
fn synthetic(pages: u32) -> Vec<LineRecord> {
    let mut lines = Vec::new();
    for page in 1..=pages {
        let mut y = 40.0;
        lines.push(heading(&format!("Chapter {}", page), 16.0, y, page));
        y += 40.0;
        for i in 0..3 {
            lines.push(body(&format!("Body line {} of chapter {}.", i, page), y, page));
            y += 12.0;
        }
        y += 30.0;
        lines.push(heading(&format!("Section {}.1", page), 13.0, y, page));
        y += 30.0;
        for i in 0..2 {
            lines.push(body(&format!("Section text {} on page {}.", i, page), y, page));
            y += 12.0;
        }
        lines.push(line("An italic aside.", 10.5, y, page, "Times-Italic"));
    }
    lines
}

#[test]
fn test_report_outline() {
    let outline = extract_outline(&report());

    assert_eq!(outline.title, "Annual Report 2024");
    assert_eq!(
        outline.outline,
        vec![
            OutlineEntry::new(HeadingLevel::H1, "1. Introduction", 2),
            OutlineEntry::new(HeadingLevel::H2, "1.1 Background", 2),
            OutlineEntry::new(HeadingLevel::H1, "2. Results", 3),
        ]
    );
}

#[test]
fn test_report_analysis() {
    let analysis = analyze(&report());

    let levels: Vec<Level> = analysis
        .paragraphs
        .iter()
        .map(|p| p.level_or_default())
        .collect();
    assert_eq!(
        levels,
        vec![
            Level::Title,
            Level::Paragraph,
            Level::H1,
            Level::Paragraph,
            Level::H2,
            Level::Paragraph,
            Level::H1,
            Level::Paragraph,
        ]
    );

    let report = &analysis.report;
    assert_eq!(report.title_page, Some(1));
    assert_eq!(report.title.as_deref(), Some("Annual Report 2024"));
    assert_eq!(
        report.thresholds,
        Some(Thresholds {
            h1: 2.0,
            h2: 1.0,
            h3: 0.0
        })
    );
    assert_eq!(report.promoted, 0);
    assert_eq!(report.repaired, 0);
    assert!(!report.scoring_skipped);
}

#[test]
fn test_scenario_heading_split_from_body() {
    let lines = vec![
        heading("Introduction", 18.0, 100.0, 0),
        body("This is body text.", 138.0, 0),
    ];
    let mut paragraphs = ParagraphGrouper::default().group_page(&lines);
    assert_eq!(paragraphs.len(), 2);

    paragraphs[0].relative_font_size = 1;
    let thresholds = Thresholds::derive(&[1]).unwrap();
    let score = header_score(&paragraphs[0], &thresholds, &LabelOptions::default());
    assert!(score >= 45.0, "score was {}", score);
}

#[test]
fn test_scenario_repair_fills_skipped_level() {
    let mut levels = vec![Level::Title, Level::H1, Level::H3];
    assert_eq!(repair_hierarchy(levels.iter_mut()), 1);
    assert_eq!(levels, vec![Level::Title, Level::H1, Level::H2]);
}

#[test]
fn test_scenario_empty_input() {
    let outline = extract_outline(&[]);
    assert_eq!(
        io::to_json(&outline, JsonFormat::Compact).unwrap(),
        r#"{"title":"","outline":[]}"#
    );
}

#[test]
fn test_scenario_numeric_paragraph_never_heading() {
    let lines = vec![
        heading("Quarterly Numbers", 20.0, 40.0, 1),
        heading("7", 40.0, 100.0, 1),
        body("Some commentary.", 200.0, 1),
        heading("7", 40.0, 40.0, 2),
        body("More commentary.", 120.0, 2),
    ];
    let analysis = analyze(&lines);

    assert_eq!(analysis.outline.title, "Quarterly Numbers");
    assert!(analysis.outline.outline.iter().all(|e| e.text != "7"));
    for p in analysis.paragraphs.iter().filter(|p| p.trimmed_text() == "7") {
        assert_eq!(p.level, Some(Level::Paragraph));
    }
}

#[test]
fn test_grouping_covers_every_line_in_order() {
    let lines = synthetic(6);
    let paragraphs = ParagraphGrouper::default().group_document(&lines);

    let covered: usize = paragraphs.iter().map(|p| p.line_count).sum();
    assert_eq!(covered, lines.len());

    for pair in paragraphs.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.page_num <= b.page_num);
        if a.page_num == b.page_num {
            assert!(a.bbox.y0 <= b.bbox.y0);
        }
    }

    // heading, body, section, body, aside per page
    assert_eq!(paragraphs.len(), 6 * 5);
}

#[test]
fn test_labels_are_legal_hierarchy() {
    let analysis = analyze(&synthetic(8));

    let titles = analysis
        .paragraphs
        .iter()
        .filter(|p| p.level == Some(Level::Title))
        .count();
    assert!(titles <= 1);

    let mut seen_h1 = false;
    let mut seen_h2 = false;
    for p in &analysis.paragraphs {
        match p.level_or_default() {
            Level::H1 => seen_h1 = true,
            Level::H2 => {
                assert!(seen_h1, "H2 before any H1: {}", p.text);
                seen_h2 = true;
            }
            Level::H3 => assert!(seen_h2, "H3 before any H2: {}", p.text),
            Level::Title | Level::Paragraph => {}
        }
    }
}

#[test]
fn test_rank_monotonic_in_font_size() {
    let analysis = analyze(&synthetic(3));
    let homogeneous: Vec<_> = analysis
        .paragraphs
        .iter()
        .filter(|p| p.is_homogeneous)
        .collect();

    for a in &homogeneous {
        for b in &homogeneous {
            if a.avg_font_size > b.avg_font_size {
                assert!(a.relative_font_size > b.relative_font_size);
            }
        }
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let lines = synthetic(12);
    let parallel = Outliner::new().analyze(&lines);
    let sequential = Outliner::new().sequential().analyze(&lines);

    assert_eq!(parallel.paragraphs, sequential.paragraphs);
    assert_eq!(parallel.outline, sequential.outline);
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.json");
    fs::write(&input, serde_json::to_string(&report()).unwrap()).unwrap();

    let lines = io::load_lines(&input).unwrap();
    assert_eq!(lines, report());

    let output = dir.path().join("outline.json");
    io::write_outline(&output, &extract_outline(&lines), JsonFormat::Pretty).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["title"], "Annual Report 2024");
    assert_eq!(written["outline"][1]["level"], "H2");
    assert_eq!(written["outline"][2]["page"], 3);
}
