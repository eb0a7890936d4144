//! docoutline CLI - document outline extraction tool

mod batch;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use docoutline::{io, AlignmentBounds, HeadingLevel, JsonFormat, Outliner};

use batch::{BatchSummary, BatchTarget};

#[derive(Parser)]
#[command(name = "docoutline")]
#[command(version)]
#[command(about = "Extract a title and H1/H2/H3 outline from extracted PDF line records", long_about = None)]
struct Cli {
    /// Input line-record JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one document
    Outline {
        /// Input line-record JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Dump grouped and labeled paragraphs (debug)
    #[command(alias = "para")]
    Paragraphs {
        /// Input line-record JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Process every JSON file in a directory
    Batch {
        /// Directory of line-record JSON files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory, distinct from DIR (next to the inputs if not specified)
        #[arg(short, long, value_name = "DIR", conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite each input with its outline
        #[arg(long)]
        in_place: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Show version information
    Version,
}

/// Pipeline settings shared by the commands.
#[derive(Args, Clone, Default)]
struct PipelineArgs {
    /// Recompute text case (and alignment, with --page-width) from the records
    #[arg(long)]
    derive_features: bool,

    /// Page width in points, used to classify alignment
    #[arg(long, value_name = "POINTS", requires = "derive_features")]
    page_width: Option<f32>,

    /// Use the relaxed alignment profile
    #[arg(long)]
    relaxed_alignment: bool,

    /// Vertical spacing threshold for merging lines into paragraphs
    #[arg(long, value_name = "POINTS", env = "DOCOUTLINE_SPACING")]
    spacing: Option<f32>,

    /// Group pages sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,
}

impl PipelineArgs {
    fn bounds(&self) -> AlignmentBounds {
        if self.relaxed_alignment {
            AlignmentBounds::relaxed()
        } else {
            AlignmentBounds::standard()
        }
    }

    fn outliner(&self) -> Outliner {
        let mut outliner = Outliner::new().with_alignment_bounds(self.bounds());
        if let Some(spacing) = self.spacing {
            outliner = outliner.with_spacing_threshold(spacing);
        }
        if self.derive_features {
            outliner = outliner.with_feature_derivation(self.page_width);
        }
        if self.sequential {
            outliner = outliner.sequential();
        }
        outliner
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            compact,
            pipeline,
        }) => cmd_outline(&input, output.as_deref(), compact, &pipeline),
        Some(Commands::Paragraphs {
            input,
            output,
            pipeline,
        }) => cmd_paragraphs(&input, output.as_deref(), &pipeline),
        Some(Commands::Batch {
            input,
            output,
            in_place,
            pipeline,
        }) => cmd_batch(&input, output, in_place, &pipeline),
        Some(Commands::Version) => {
            cmd_version();
            Ok(true)
        }
        None => {
            // Default behavior: outline if input is provided
            if let Some(input) = cli.input {
                cmd_outline(
                    &input,
                    cli.output.as_deref(),
                    false,
                    &PipelineArgs::default(),
                )
            } else {
                println!("{}", "Usage: docoutline <FILE> [-o OUTPUT]".yellow());
                println!("       docoutline --help for more information");
                Ok(true)
            }
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Command result: `Ok(false)` exits non-zero without an error line.
type CmdResult = Result<bool, Box<dyn std::error::Error>>;

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pipeline: &PipelineArgs,
) -> CmdResult {
    let lines = io::load_lines(input)?;
    let outline = pipeline.outliner().outline(&lines);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if let Some(path) = output {
        io::write_outline(path, &outline, format)?;
        println!("{} {}", "Saved to".green(), path.display());
        println!(
            "  {} title: {}",
            "├─".dimmed(),
            if outline.title.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                outline.title.clone()
            }
        );
        println!(
            "  {} headings: {} (H1 {}, H2 {}, H3 {})",
            "└─".dimmed(),
            outline.outline.len(),
            outline.count(HeadingLevel::H1),
            outline.count(HeadingLevel::H2),
            outline.count(HeadingLevel::H3)
        );
    } else {
        println!("{}", io::to_json(&outline, format)?);
    }

    Ok(true)
}

fn cmd_paragraphs(input: &Path, output: Option<&Path>, pipeline: &PipelineArgs) -> CmdResult {
    let lines = io::load_lines(input)?;
    let analysis = pipeline.outliner().analyze(&lines);
    let json = analysis.paragraphs_to_json(JsonFormat::Pretty)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    // Diagnostics go to stderr so stdout stays valid JSON
    let report = &analysis.report;
    eprintln!("{}", "Labeling Report".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "Paragraphs".bold(), analysis.paragraphs.len());
    if let Some(ref title) = report.title {
        eprintln!(
            "{}: {} ({} paragraphs)",
            "Title".bold(),
            title,
            report.title_members
        );
    }
    match &report.thresholds {
        Some(t) => eprintln!(
            "{}: H1 {}, H2 {}, H3 {}",
            "Thresholds".bold(),
            t.h1,
            t.h2,
            t.h3
        ),
        None => eprintln!("{}: none (scoring skipped)", "Thresholds".bold()),
    }
    eprintln!("{}: {}", "Promoted".bold(), report.promoted);
    eprintln!("{}: {}", "Repaired".bold(), report.repaired);

    Ok(true)
}

fn cmd_batch(
    input: &Path,
    output: Option<PathBuf>,
    in_place: bool,
    pipeline: &PipelineArgs,
) -> CmdResult {
    let target = match (output, in_place) {
        (_, true) => BatchTarget::InPlace,
        (Some(dir), false) => BatchTarget::Directory(dir),
        (None, false) => BatchTarget::Alongside,
    };

    let summary = batch::run(input, &target, &pipeline.outliner(), true)?;
    print_summary(&summary, input, &target);

    Ok(summary.failed == 0)
}

fn print_summary(summary: &BatchSummary, input: &Path, target: &BatchTarget) {
    println!("\n{}", "Processing Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Total files".bold(), summary.total);
    println!("{}: {}", "Succeeded".bold(), summary.succeeded.to_string().green());
    let failed = summary.failed.to_string();
    println!(
        "{}: {}",
        "Failed".bold(),
        if summary.failed > 0 { failed.red() } else { failed.normal() }
    );
    println!("{}: {:.1}%", "Success rate".bold(), summary.success_rate());
    match target {
        BatchTarget::Alongside => println!("Outlines written next to inputs in {}", input.display()),
        BatchTarget::Directory(dir) => println!("Outlines written to {}", dir.display()),
        BatchTarget::InPlace => println!("Files overwritten in place in {}", input.display()),
    }
}

fn cmd_version() {
    println!("{} {}", "docoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline extraction tool");
    println!();
    println!("License: MIT");
}
