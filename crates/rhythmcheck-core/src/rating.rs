//! Per-item rating: one dimension's value against its band's range.
//!
//! A value is scored by its normalized deviation from the range midpoint,
//! not by the [min, max] extremes. Min and max are soft targets; the
//! midpoint is the ideal. A value sitting exactly at min or max can still
//! land above the best level when the range is wide relative to the 10%
//! tolerance, which is intentional.

use serde::{Deserialize, Serialize};

use crate::model::HourRange;

/// Symbolic marks attached to levels 0 (best) through 4 (worst).
pub const LEVEL_MARKS: [&str; 5] = ["\u{25CE}", "\u{25EF}", "\u{25B3}", "\u{25B2}", "\u{25A0}"];

/// Level comments, direction-independent, softly worded.
const LEVEL_COMMENTS: [&str; 5] = [
    "A very good balance, comfortably within the guideline for this age group.",
    "Mostly within the guideline range. This looks easy to keep up.",
    "A little outside the guideline, but adjustable without forcing anything.",
    "Somewhat off balance. If it feels like a concern, a small adjustment may help.",
    "Quite far from the guideline, but every household's rhythm is different. \
     Settle things gradually while keeping an eye on how it goes.",
];

/// Rating of one dimension for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResult {
    /// Discrete rating, 0 (best) to 4 (worst)
    pub level: u8,
    /// Symbolic mark for the level
    pub mark: String,
    /// Level-dependent comment, independent of direction
    pub base_comment: String,
    /// Phrase describing where the value sits relative to the range
    pub tendency: String,
    /// Tendency and base comment joined for display
    pub full_comment: String,
}

/// Score one measured value (in hours) against a band's range.
pub fn evaluate_item(value: f64, range: &HourRange) -> ItemResult {
    let midpoint = range.midpoint();
    let ratio = (value - midpoint).abs() / range.width();
    let level = level_for_ratio(ratio);

    let tendency = tendency_phrase(value, range);
    let base_comment = LEVEL_COMMENTS[level as usize];
    let full_comment = format!("{tendency} {base_comment}");

    ItemResult {
        level,
        mark: LEVEL_MARKS[level as usize].to_string(),
        base_comment: base_comment.to_string(),
        tendency: tendency.to_string(),
        full_comment,
    }
}

/// Map a normalized deviation to a level. Threshold upper bounds are
/// inclusive: 0.10, 0.25, 0.50, 1.00, then the worst level.
fn level_for_ratio(ratio: f64) -> u8 {
    if ratio <= 0.10 {
        0
    } else if ratio <= 0.25 {
        1
    } else if ratio <= 0.50 {
        2
    } else if ratio <= 1.0 {
        3
    } else {
        4
    }
}

fn tendency_phrase(value: f64, range: &HourRange) -> &'static str {
    let midpoint = range.midpoint();
    if value < range.min {
        "Less than the guideline amount."
    } else if value > range.max {
        "More than the guideline amount."
    } else if value < midpoint {
        "Within the guideline, on the lower side."
    } else if value > midpoint {
        "Within the guideline, on the higher side."
    } else {
        "Right around the middle of the guideline."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn range(min: f64, max: f64) -> HourRange {
        HourRange::new(min, max)
    }

    #[test]
    fn test_midpoint_is_best_level() {
        let r = range(8.0, 10.0);
        let result = evaluate_item(9.0, &r);
        assert_eq!(result.level, 0);
        assert_eq!(result.mark, "\u{25CE}");
        assert_eq!(result.tendency, "Right around the middle of the guideline.");
    }

    #[test]
    fn test_range_boundary_is_level_two() {
        // sleep [9.0, 11.0]: mid 10.0, width 2.0, value 9.0 -> ratio 0.5
        let r = range(9.0, 11.0);
        assert_eq!(evaluate_item(9.0, &r).level, 2);
        assert_eq!(evaluate_item(11.0, &r).level, 2);
    }

    #[test]
    fn test_level_thresholds_inclusive() {
        // width 1.0, mid 0.5: deviation equals ratio
        let r = range(0.0, 1.0);
        assert_eq!(evaluate_item(0.60, &r).level, 0); // ratio 0.10
        assert_eq!(evaluate_item(0.75, &r).level, 1); // ratio 0.25
        assert_eq!(evaluate_item(1.00, &r).level, 2); // ratio 0.50
        assert_eq!(evaluate_item(1.50, &r).level, 3); // ratio 1.00
        assert_eq!(evaluate_item(1.51, &r).level, 4);
    }

    #[test]
    fn test_point_range_uses_width_floor() {
        // width floors at 0.1, so 0.04 off the point is ratio 0.4
        let r = range(1.0, 1.0);
        assert_eq!(evaluate_item(1.0, &r).level, 0);
        assert_eq!(evaluate_item(1.04, &r).level, 2);
        assert_eq!(evaluate_item(1.2, &r).level, 4);
    }

    #[test]
    fn test_tendency_below_min() {
        let r = range(8.0, 10.0);
        let result = evaluate_item(6.0, &r);
        assert_eq!(result.tendency, "Less than the guideline amount.");
        assert!(result.full_comment.starts_with(&result.tendency));
        assert!(result.full_comment.ends_with(&result.base_comment));
    }

    #[test]
    fn test_tendency_above_max() {
        let r = range(8.0, 10.0);
        assert_eq!(
            evaluate_item(12.0, &r).tendency,
            "More than the guideline amount."
        );
    }

    #[test]
    fn test_tendency_inside_range() {
        let r = range(8.0, 10.0);
        assert_eq!(
            evaluate_item(8.5, &r).tendency,
            "Within the guideline, on the lower side."
        );
        assert_eq!(
            evaluate_item(9.5, &r).tendency,
            "Within the guideline, on the higher side."
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let result = evaluate_item(9.0, &range(8.0, 10.0));
        let json = serde_json::to_string(&result).unwrap();
        let back: ItemResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    proptest! {
        #[test]
        fn prop_level_always_in_range(
            value in 0.0f64..24.0,
            min in 0.0f64..12.0,
            extent in 0.0f64..12.0,
        ) {
            let r = range(min, min + extent);
            let result = evaluate_item(value, &r);
            prop_assert!(result.level <= 4);
        }

        #[test]
        fn prop_farther_from_midpoint_never_rates_better(
            min in 0.0f64..12.0,
            extent in 0.0f64..12.0,
            near in 0.0f64..6.0,
            extra in 0.0f64..6.0,
        ) {
            let r = range(min, min + extent);
            let mid = r.midpoint();
            let close = evaluate_item(mid + near, &r);
            let far = evaluate_item(mid + near + extra, &r);
            prop_assert!(far.level >= close.level);
        }

        #[test]
        fn prop_symmetric_around_midpoint(
            min in 0.0f64..12.0,
            extent in 0.1f64..12.0,
            offset in 0.0f64..6.0,
        ) {
            let r = range(min, min + extent);
            let mid = r.midpoint();
            let above = evaluate_item(mid + offset, &r);
            let below = evaluate_item(mid - offset, &r);
            prop_assert_eq!(above.level, below.level);
        }
    }
}
