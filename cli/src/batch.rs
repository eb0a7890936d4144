//! Directory batch mode.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};

use docoutline::{io, HeadingLevel, JsonFormat, Outliner};

/// Suffix of outlines written next to their inputs.
const OUTLINE_SUFFIX: &str = ".outline.json";

/// Where batch outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchTarget {
    /// `<stem>.outline.json` next to each input
    Alongside,
    /// `<stem>.json` in the given directory
    Directory(PathBuf),
    /// Overwrite each input with its outline
    InPlace,
}

impl BatchTarget {
    /// Output path for one input file.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        match self {
            BatchTarget::Alongside => input.with_file_name(format!("{}{}", stem, OUTLINE_SUFFIX)),
            BatchTarget::Directory(dir) => dir.join(format!("{}.json", stem)),
            BatchTarget::InPlace => input.to_path_buf(),
        }
    }
}

/// Counts of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Percentage of files processed successfully (100 for an empty batch).
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.succeeded as f64 / self.total as f64 * 100.0
    }
}

/// The `*.json` files of a directory, sorted by name.
///
/// Outlines this tool wrote alongside earlier inputs are skipped.
pub fn collect_inputs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if name.ends_with(".json") && !name.ends_with(OUTLINE_SUFFIX) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Process every input of `dir`, logging and counting failures.
pub fn run(
    dir: &Path,
    target: &BatchTarget,
    outliner: &Outliner,
    show_progress: bool,
) -> Result<BatchSummary, Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("Input directory does not exist: {}", dir.display()).into());
    }
    if let BatchTarget::Directory(out) = target {
        fs::create_dir_all(out)?;
        if fs::canonicalize(out)? == fs::canonicalize(dir)? {
            return Err(
                "Output directory is the input directory; use --in-place to overwrite inputs"
                    .into(),
            );
        }
    }

    let files = collect_inputs(dir)?;
    let mut summary = BatchSummary {
        total: files.len(),
        ..Default::default()
    };
    if files.is_empty() {
        warn!("No JSON files found in {}", dir.display());
        return Ok(summary);
    }
    info!("Found {} JSON files to process", files.len());

    let pb = if show_progress {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    for file in &files {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        pb.set_message(name.to_string());

        match process_file(file, &target.output_path(file), outliner) {
            Ok(()) => summary.succeeded += 1,
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                summary.failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");
    Ok(summary)
}

fn process_file(
    input: &Path,
    output: &Path,
    outliner: &Outliner,
) -> docoutline::Result<()> {
    let lines = io::load_lines(input)?;
    let outline = outliner.outline(&lines);

    info!(
        "{}: title {}, {} headings (H1 {}, H2 {}, H3 {})",
        input.display(),
        if outline.title.is_empty() { "missing" } else { "found" },
        outline.outline.len(),
        outline.count(HeadingLevel::H1),
        outline.count(HeadingLevel::H2),
        outline.count(HeadingLevel::H3)
    );

    io::write_outline(output, &outline, JsonFormat::Pretty)
}
