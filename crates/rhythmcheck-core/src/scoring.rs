//! Overall aggregation: per-item levels into a single letter grade.
//!
//! Each level maps to points through a fixed inverse table (best level
//! earns the most points) and the points are summed. The letter-grade
//! cutoffs are derived from the number of dimensions scored rather than
//! hard-coded, because a reference model may track four or five
//! dimensions: the tiers sit at 90/70/50/30 percent of the maximum total,
//! which reproduces the canonical 18/14/10/6 table for five dimensions.

use serde::{Deserialize, Serialize};

/// Points awarded per level, best (level 0) to worst (level 4).
pub const LEVEL_SCORES: [u32; 5] = [4, 3, 2, 1, 0];

/// Points for one level. Out-of-range levels score zero.
pub fn level_to_score(level: u8) -> u32 {
    LEVEL_SCORES.get(level as usize).copied().unwrap_or(0)
}

/// Letter grade for the aggregate result, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    E,
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
        };
        write!(f, "{letter}")
    }
}

impl LetterGrade {
    /// Fixed tier comment, softly worded.
    pub fn comment(&self) -> &'static str {
        match self {
            LetterGrade::A => {
                "A very settled daily rhythm. The current balance looks worth holding on to."
            }
            LetterGrade::B => {
                "A generally good daily rhythm. A little attention to any item that stands \
                 out would make it even steadier."
            }
            LetterGrade::C => {
                "About half strengths and half things to revisit. Adjust little by little, \
                 at a comfortable pace."
            }
            LetterGrade::D => {
                "There are some useful signals here. Revisiting one item at a time, starting \
                 with whichever stands out, may work well."
            }
            LetterGrade::E => {
                "Several items sit away from the guidelines, but daily life differs from \
                 household to household. Adjust gently, and consider talking with school or \
                 a specialist if that would help."
            }
        }
    }
}

/// Tiered cutoffs for the total score, relative to the number of
/// dimensions scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCutoffs {
    /// Minimum total for grade A
    pub a: u32,
    /// Minimum total for grade B
    pub b: u32,
    /// Minimum total for grade C
    pub c: u32,
    /// Minimum total for grade D; below this is E
    pub d: u32,
}

impl GradeCutoffs {
    /// Derive cutoffs for a model scoring `dimension_count` dimensions.
    ///
    /// Tiers are the ceiling of 90/70/50/30 percent of the maximum total,
    /// computed in integer arithmetic.
    pub fn for_dimension_count(dimension_count: usize) -> Self {
        let max_total = dimension_count as u32 * LEVEL_SCORES[0];
        let tier = |percent: u32| (max_total * percent).div_ceil(100);
        Self {
            a: tier(90),
            b: tier(70),
            c: tier(50),
            d: tier(30),
        }
    }

    /// Letter grade for a total score under these cutoffs.
    pub fn grade_for_total(&self, total: u32) -> LetterGrade {
        if total >= self.a {
            LetterGrade::A
        } else if total >= self.b {
            LetterGrade::B
        } else if total >= self.c {
            LetterGrade::C
        } else if total >= self.d {
            LetterGrade::D
        } else {
            LetterGrade::E
        }
    }
}

/// Aggregate result for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    /// Letter grade A (best) through E (worst)
    pub grade: LetterGrade,
    /// Fixed comment for the grade tier
    pub comment: String,
    /// Total points across all scored dimensions
    pub total: u32,
}

/// Combine per-item levels into an overall result. Cutoffs are derived
/// from the number of levels supplied.
pub fn calculate_overall(levels: &[u8]) -> OverallResult {
    let total: u32 = levels.iter().map(|&level| level_to_score(level)).sum();
    let cutoffs = GradeCutoffs::for_dimension_count(levels.len());
    let grade = cutoffs.grade_for_total(total);

    OverallResult {
        grade,
        comment: grade.comment().to_string(),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_scores_strictly_decreasing() {
        for level in 0..4u8 {
            assert!(
                level_to_score(level) > level_to_score(level + 1),
                "score must strictly decrease from level {level}"
            );
        }
    }

    #[test]
    fn test_out_of_range_level_scores_zero() {
        assert_eq!(level_to_score(5), 0);
        assert_eq!(level_to_score(u8::MAX), 0);
    }

    #[test]
    fn test_five_dimension_cutoffs_match_canonical_table() {
        let cutoffs = GradeCutoffs::for_dimension_count(5);
        assert_eq!(cutoffs, GradeCutoffs { a: 18, b: 14, c: 10, d: 6 });
    }

    #[test]
    fn test_four_dimension_cutoffs_scale_down() {
        let cutoffs = GradeCutoffs::for_dimension_count(4);
        // max total 16: ceil of 14.4 / 11.2 / 8.0 / 4.8
        assert_eq!(cutoffs, GradeCutoffs { a: 15, b: 12, c: 8, d: 5 });
    }

    #[test]
    fn test_all_best_levels_give_grade_a() {
        for n in [4usize, 5] {
            let levels = vec![0u8; n];
            let overall = calculate_overall(&levels);
            assert_eq!(overall.total, 4 * n as u32);
            assert_eq!(overall.grade, LetterGrade::A);
        }
    }

    #[test]
    fn test_all_worst_levels_give_grade_e() {
        let overall = calculate_overall(&[4, 4, 4, 4, 4]);
        assert_eq!(overall.total, 0);
        assert_eq!(overall.grade, LetterGrade::E);
    }

    #[test]
    fn test_grade_tiers_for_five_dimensions() {
        let cutoffs = GradeCutoffs::for_dimension_count(5);
        assert_eq!(cutoffs.grade_for_total(20), LetterGrade::A);
        assert_eq!(cutoffs.grade_for_total(18), LetterGrade::A);
        assert_eq!(cutoffs.grade_for_total(17), LetterGrade::B);
        assert_eq!(cutoffs.grade_for_total(14), LetterGrade::B);
        assert_eq!(cutoffs.grade_for_total(13), LetterGrade::C);
        assert_eq!(cutoffs.grade_for_total(10), LetterGrade::C);
        assert_eq!(cutoffs.grade_for_total(9), LetterGrade::D);
        assert_eq!(cutoffs.grade_for_total(6), LetterGrade::D);
        assert_eq!(cutoffs.grade_for_total(5), LetterGrade::E);
        assert_eq!(cutoffs.grade_for_total(0), LetterGrade::E);
    }

    #[test]
    fn test_overall_carries_tier_comment() {
        let overall = calculate_overall(&[0, 0, 0, 0, 0]);
        assert_eq!(overall.comment, LetterGrade::A.comment());
    }

    #[test]
    fn test_letter_grade_display() {
        assert_eq!(LetterGrade::A.to_string(), "A");
        assert_eq!(LetterGrade::E.to_string(), "E");
    }
}
