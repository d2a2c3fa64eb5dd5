//! Reference model: tracked dimensions, grade bands, and band resolution.
//!
//! The model is built once at startup and passed by reference into the
//! evaluation engine. The built-in tables cover twelve school grades split
//! into four bands; a custom model can be loaded from TOML when a different
//! dimension set or different ranges are wanted (the 4-dimension variant
//! without reading, for example).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, Result};

/// One tracked life-activity.
///
/// The enum order is the fixed evaluation and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Night sleep, derived from bed/wake clock times
    Sleep,
    /// Home study, entered in hours
    Study,
    /// Exercise, entered in hours
    Exercise,
    /// Phone and game screen time, entered in hours
    Screen,
    /// Reading, entered in minutes and converted to hours
    Reading,
}

impl Dimension {
    /// All dimensions in evaluation order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Sleep,
        Dimension::Study,
        Dimension::Exercise,
        Dimension::Screen,
        Dimension::Reading,
    ];

    /// Stable key used in configuration files and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Sleep => "sleep",
            Dimension::Study => "study",
            Dimension::Exercise => "exercise",
            Dimension::Screen => "screen",
            Dimension::Reading => "reading",
        }
    }

    /// Display label for result rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Sleep => "Sleep",
            Dimension::Study => "Home study",
            Dimension::Exercise => "Exercise",
            Dimension::Screen => "Screen time",
            Dimension::Reading => "Reading",
        }
    }

    /// Emoji glyph shown next to the label.
    pub fn emoji(&self) -> &'static str {
        match self {
            Dimension::Sleep => "\u{1F6CC}",
            Dimension::Study => "\u{270D}\u{FE0F}",
            Dimension::Exercise => "\u{1F3C3}",
            Dimension::Screen => "\u{1F4F1}",
            Dimension::Reading => "\u{1F4D6}",
        }
    }

    /// How raw input for this dimension is supplied and validated.
    pub fn input_kind(&self) -> InputKind {
        match self {
            Dimension::Sleep => InputKind::ClockTimes,
            Dimension::Reading => InputKind::Minutes,
            _ => InputKind::Hours,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Unit-of-input for a dimension. Static; only the acceptable range varies
/// by band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// Two HH:MM clock strings (bed and wake time)
    ClockTimes,
    /// Direct hours, valid in [0, 24]
    Hours,
    /// Minutes, valid in [0, 120], converted to hours
    Minutes,
}

impl InputKind {
    /// Upper bound for a raw numeric input of this kind.
    pub fn raw_max(&self) -> f64 {
        match self {
            InputKind::ClockTimes | InputKind::Hours => 24.0,
            InputKind::Minutes => 120.0,
        }
    }

    /// Whether a raw numeric input is acceptable for this kind.
    pub fn accepts(&self, raw: f64) -> bool {
        raw.is_finite() && raw >= 0.0 && raw <= self.raw_max()
    }

    /// Convert a raw numeric input into hours.
    pub fn to_hours(&self, raw: f64) -> f64 {
        match self {
            InputKind::Minutes => raw / 60.0,
            _ => raw,
        }
    }
}

/// Minimum effective range width used when normalizing deviations.
/// Avoids division by zero when a band's range is a single point.
pub const MIN_RANGE_WIDTH: f64 = 0.1;

/// Acceptable range for one dimension within one band, in hours.
///
/// Min and max are soft targets; the midpoint is the ideal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourRange {
    pub min: f64,
    pub max: f64,
}

impl HourRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The ideal value for this range.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Effective width, floored at [`MIN_RANGE_WIDTH`].
    pub fn width(&self) -> f64 {
        (self.max - self.min).max(MIN_RANGE_WIDTH)
    }
}

/// A grade-level grouping sharing one reference range per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Stable identifier (e.g. "junior")
    pub id: String,
    /// Human label (e.g. "Grades 7-9")
    pub label: String,
    /// Grade labels that resolve to this band
    pub grades: Vec<String>,
    /// Acceptable range per tracked dimension. A band evaluates exactly
    /// the dimensions listed here.
    pub ranges: BTreeMap<Dimension, HourRange>,
}

impl GradeBand {
    /// Range for one dimension, if this band tracks it.
    pub fn range(&self, dimension: Dimension) -> Option<&HourRange> {
        self.ranges.get(&dimension)
    }

    /// Dimensions this band evaluates, in evaluation order.
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.ranges.keys().copied()
    }
}

/// The full reference model: an ordered list of grade bands.
///
/// Bands are checked in declaration order during resolution, so lookups
/// stay deterministic even if grade sets were ever misconfigured to
/// overlap (construction rejects that, but the order is fixed regardless).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceModel {
    bands: Vec<GradeBand>,
}

/// On-disk shape of a custom model file.
#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(rename = "band")]
    bands: Vec<GradeBand>,
}

impl ReferenceModel {
    /// Build a model from bands, validating the structural invariants:
    /// every range has min <= max, every band has at least one grade label
    /// and one dimension, and no grade label belongs to more than one band.
    pub fn new(bands: Vec<GradeBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(EvaluationError::InvalidModel(
                "model defines no grade bands".to_string(),
            ));
        }

        let mut seen_grades: BTreeSet<&str> = BTreeSet::new();
        for band in &bands {
            if band.grades.is_empty() {
                return Err(EvaluationError::InvalidModel(format!(
                    "band '{}' lists no grade labels",
                    band.id
                )));
            }
            if band.ranges.is_empty() {
                return Err(EvaluationError::InvalidModel(format!(
                    "band '{}' tracks no dimensions",
                    band.id
                )));
            }
            for (dimension, range) in &band.ranges {
                if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                    return Err(EvaluationError::InvalidModel(format!(
                        "band '{}' has an invalid {} range ({} to {})",
                        band.id, dimension, range.min, range.max
                    )));
                }
            }
            for grade in &band.grades {
                if !seen_grades.insert(grade.as_str()) {
                    return Err(EvaluationError::InvalidModel(format!(
                        "grade label '{grade}' appears in more than one band"
                    )));
                }
            }
        }

        Ok(Self { bands })
    }

    /// The built-in four-band model for school grades 1-12.
    pub fn builtin() -> Self {
        let bands = vec![
            GradeBand {
                id: "elem_low".to_string(),
                label: "Grades 1-3".to_string(),
                grades: grade_labels(1, 3),
                ranges: ranges([
                    (Dimension::Sleep, 9.0, 11.0),
                    (Dimension::Study, 0.5, 1.0),
                    (Dimension::Exercise, 0.5, 1.0),
                    (Dimension::Screen, 0.0, 1.0),
                    (Dimension::Reading, 0.1, 0.5), // 6-30 min
                ]),
            },
            GradeBand {
                id: "elem_high".to_string(),
                label: "Grades 4-6".to_string(),
                grades: grade_labels(4, 6),
                ranges: ranges([
                    (Dimension::Sleep, 9.0, 11.0),
                    (Dimension::Study, 1.0, 1.5),
                    (Dimension::Exercise, 0.5, 1.0),
                    (Dimension::Screen, 0.0, 1.5),
                    (Dimension::Reading, 0.2, 0.6), // 12-36 min
                ]),
            },
            GradeBand {
                id: "junior".to_string(),
                label: "Grades 7-9".to_string(),
                grades: grade_labels(7, 9),
                ranges: ranges([
                    (Dimension::Sleep, 8.0, 10.0),
                    (Dimension::Study, 1.0, 2.0),
                    (Dimension::Exercise, 0.5, 1.0),
                    (Dimension::Screen, 1.0, 2.5),
                    (Dimension::Reading, 0.1, 0.5), // 6-30 min
                ]),
            },
            GradeBand {
                id: "senior".to_string(),
                label: "Grades 10-12".to_string(),
                grades: grade_labels(10, 12),
                ranges: ranges([
                    (Dimension::Sleep, 8.0, 10.0),
                    (Dimension::Study, 1.5, 3.0),
                    (Dimension::Exercise, 0.5, 1.0),
                    (Dimension::Screen, 2.0, 3.0),
                    (Dimension::Reading, 0.0, 0.3), // 0-18 min
                ]),
            },
        ];

        // The built-in tables satisfy the invariants by construction.
        Self::new(bands).expect("built-in reference model is valid")
    }

    /// Parse and validate a custom model from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ModelFile = toml::from_str(text)
            .map_err(|e| EvaluationError::InvalidModel(e.to_string()))?;
        Self::new(file.bands)
    }

    /// Resolve a grade label to its band, scanning bands in declaration
    /// order. Returns `None` when no band lists the label.
    pub fn band_for_grade(&self, grade: &str) -> Option<&GradeBand> {
        self.bands
            .iter()
            .find(|band| band.grades.iter().any(|g| g == grade))
    }

    /// All bands in declaration order.
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }
}

fn grade_labels(from: u8, to: u8) -> Vec<String> {
    (from..=to).map(|n| format!("grade-{n}")).collect()
}

fn ranges<const N: usize>(entries: [(Dimension, f64, f64); N]) -> BTreeMap<Dimension, HourRange> {
    entries
        .into_iter()
        .map(|(dimension, min, max)| (dimension, HourRange::new(min, max)))
        .collect()
}
