//! Heading font-rank thresholds.

use serde::Serialize;

use crate::model::HeadingLevel;

/// Minimum value count for percentile thresholds.
const PERCENTILE_MIN_VALUES: usize = 4;

/// Font-rank thresholds for H1/H2/H3. A threshold of 0 is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Thresholds {
    /// H1 threshold
    pub h1: f32,
    /// H2 threshold
    pub h2: f32,
    /// H3 threshold
    pub h3: f32,
}

impl Thresholds {
    /// Derive thresholds from the positive font ranks of all non-title
    /// paragraphs.
    ///
    /// Four or more values use the 90th/75th/60th percentiles; fewer fall
    /// back to the distinct values in descending order. Returns `None`
    /// when there are no positive ranks at all.
    pub fn derive(ranks: &[u32]) -> Option<Self> {
        let mut values: Vec<f32> = ranks.iter().filter(|r| **r > 0).map(|r| *r as f32).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f32::total_cmp);

        if values.len() >= PERCENTILE_MIN_VALUES {
            return Some(Self {
                h1: percentile(&values, 90.0),
                h2: percentile(&values, 75.0),
                h3: percentile(&values, 60.0),
            });
        }

        values.dedup();
        values.reverse();
        let thresholds = match values.as_slice() {
            [h1, h2, h3, ..] => Self {
                h1: *h1,
                h2: *h2,
                h3: *h3,
            },
            [h1, h2] => Self {
                h1: *h1,
                h2: *h2,
                h3: 0.0,
            },
            [h1] => Self {
                h1: *h1,
                ..Self::default()
            },
            [] => Self::default(),
        };
        Some(thresholds)
    }

    /// Largest threshold, at least 1.
    pub fn max(&self) -> f32 {
        self.h1.max(self.h2).max(self.h3).max(1.0)
    }

    /// First heading level whose (set) threshold the rank reaches.
    pub fn level_for(&self, rank: f32) -> Option<HeadingLevel> {
        [
            (self.h1, HeadingLevel::H1),
            (self.h2, HeadingLevel::H2),
            (self.h3, HeadingLevel::H3),
        ]
        .into_iter()
        .find(|(threshold, _)| *threshold > 0.0 && rank >= *threshold)
        .map(|(_, level)| level)
    }
}

/// Linearly interpolated percentile of sorted values.
fn percentile(sorted: &[f32], pct: f32) -> f32 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = pct / 100.0 * (n - 1) as f32;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = pos - lo as f32;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}
