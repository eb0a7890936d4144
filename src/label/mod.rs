//! Hierarchy labeling of paragraphs.
//!
//! Runs in four phases over the whole document: title detection, threshold
//! derivation, header scoring with level assignment, then lookahead
//! promotion and hierarchy repair.

mod labeler;
mod options;
mod repair;
mod scoring;
mod thresholds;
mod title;

pub use labeler::{LabelReport, Labeling, StructureLabeler};
pub use options::{LabelOptions, ScoreBands, ScoreWeights};
pub use repair::repair_hierarchy;
pub use scoring::{assign_level, header_score, is_never_heading, ScoreBand};
pub use thresholds::Thresholds;
pub use title::{detect_title, TitleCandidate};
