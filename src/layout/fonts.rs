//! Document-relative font size ranking.

use std::collections::BTreeMap;

/// Ordinal rank of every distinct font size in a document (0 = smallest).
///
/// Sizes are keyed at 0.01pt precision so that floating-point noise from
/// the extractor does not split one size into several ranks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontRanks {
    ranks: BTreeMap<i64, u32>,
}

impl FontRanks {
    /// Build ranks from all font sizes observed in the document.
    pub fn from_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let mut keys: Vec<i64> = sizes
            .into_iter()
            .filter(|s| s.is_finite())
            .map(size_key)
            .collect();
        keys.sort_unstable();
        keys.dedup();

        let ranks = keys
            .into_iter()
            .enumerate()
            .map(|(rank, key)| (key, rank as u32))
            .collect();
        Self { ranks }
    }

    /// Rank of a font size; sizes never observed rank 0.
    pub fn rank(&self, size: f32) -> u32 {
        if !size.is_finite() {
            return 0;
        }
        self.ranks.get(&size_key(size)).copied().unwrap_or(0)
    }

    /// Check whether a size was observed.
    pub fn contains(&self, size: f32) -> bool {
        size.is_finite() && self.ranks.contains_key(&size_key(size))
    }

    /// Number of distinct sizes.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if no sizes were observed.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Distinct sizes (2-decimal precision) with their ranks, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = (f32, u32)> + '_ {
        self.ranks
            .iter()
            .map(|(key, rank)| (*key as f32 / 100.0, *rank))
    }
}

fn size_key(size: f32) -> i64 {
    (f64::from(size) * 100.0).round() as i64
}

/// Round a value to 2 decimal places.
pub(crate) fn round2(value: f32) -> f32 {
    ((f64::from(value) * 100.0).round() / 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_ranks() {
        let ranks = FontRanks::from_sizes([12.0, 18.0, 12.0, 24.0, 10.0, 18.0]);

        assert_eq!(ranks.len(), 4);
        assert_eq!(ranks.rank(10.0), 0);
        assert_eq!(ranks.rank(12.0), 1);
        assert_eq!(ranks.rank(18.0), 2);
        assert_eq!(ranks.rank(24.0), 3);
    }

    #[test]
    fn test_rounding_merges_noise() {
        let ranks = FontRanks::from_sizes([11.999_999, 12.0, 12.001]);
        assert_eq!(ranks.len(), 1);
        assert_eq!(ranks.rank(12.0), 0);
        assert!(ranks.contains(12.004));
    }

    #[test]
    fn test_missing_size_ranks_zero() {
        let ranks = FontRanks::from_sizes([9.0, 14.0]);
        assert_eq!(ranks.rank(11.0), 0);
        assert_eq!(ranks.rank(f32::NAN), 0);
        assert!(!ranks.contains(11.0));

        let empty = FontRanks::from_sizes(std::iter::empty());
        assert!(empty.is_empty());
        assert_eq!(empty.rank(12.0), 0);
    }

    #[test]
    fn test_rank_monotonic_and_stable() {
        let sizes = [8.5, 30.0, 9.75, 14.25, 11.0, 9.75, 22.0];
        let a = FontRanks::from_sizes(sizes);
        let b = FontRanks::from_sizes(sizes.iter().rev().copied());
        assert_eq!(a, b);

        let ordered: Vec<(f32, u32)> = a.iter().collect();
        for pair in ordered.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
        assert_eq!(ordered[0].1, 0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345_67), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }
}
