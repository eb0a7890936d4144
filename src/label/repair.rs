//! Hierarchy repair.

use crate::model::Level;

/// Rewrite levels in place so no heading skips a depth going deeper.
///
/// An H2 before any H1 becomes H1; an H3 before any H2 becomes H2 once an
/// H1 has been seen, otherwise H1. Returns the number of rewrites.
pub fn repair_hierarchy<'a, I>(levels: I) -> usize
where
    I: IntoIterator<Item = &'a mut Level>,
{
    let mut seen_h1 = false;
    let mut seen_h2 = false;
    let mut rewrites = 0;

    for level in levels {
        let repaired = match *level {
            Level::H1 => {
                seen_h1 = true;
                Level::H1
            }
            Level::H2 if seen_h1 => {
                seen_h2 = true;
                Level::H2
            }
            Level::H2 => {
                seen_h1 = true;
                Level::H1
            }
            Level::H3 if seen_h2 => Level::H3,
            Level::H3 if seen_h1 => {
                seen_h2 = true;
                Level::H2
            }
            Level::H3 => {
                seen_h1 = true;
                Level::H1
            }
            other @ (Level::Title | Level::Paragraph) => other,
        };

        if repaired != *level {
            *level = repaired;
            rewrites += 1;
        }
    }

    rewrites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level::*;

    fn repaired(mut levels: Vec<Level>) -> (Vec<Level>, usize) {
        let n = repair_hierarchy(levels.iter_mut());
        (levels, n)
    }

    #[test]
    fn test_h3_after_h1_becomes_h2() {
        assert_eq!(repaired(vec![Title, H1, H3]), (vec![Title, H1, H2], 1));
    }

    #[test]
    fn test_leading_h2_and_h3_become_h1() {
        assert_eq!(repaired(vec![H2, Paragraph, H2]), (vec![H1, Paragraph, H2], 1));
        assert_eq!(repaired(vec![H3, H3, H3]), (vec![H1, H2, H3], 2));
    }

    #[test]
    fn test_legal_sequences_are_untouched() {
        let levels = vec![Title, H1, H2, H3, Paragraph, H1, H3, H2, H1];
        assert_eq!(repaired(levels.clone()), (levels, 0));
    }

    #[test]
    fn test_result_is_always_legal() {
        let (levels, _) = repaired(vec![H3, H2, H3, Paragraph, H2, H1, H3, H3]);
        let mut seen_h1 = false;
        let mut seen_h2 = false;
        for level in levels {
            match level {
                H1 => seen_h1 = true,
                H2 => {
                    assert!(seen_h1);
                    seen_h2 = true;
                }
                H3 => assert!(seen_h2),
                _ => {}
            }
        }
    }
}
