//! The evaluation entry point: raw inputs to per-item ratings and an
//! overall grade.
//!
//! All validation happens before any scoring. The engine checks the grade
//! label, resolves the band, derives and sanity-checks the sleep duration,
//! then validates the remaining measurements in dimension order, returning
//! the first failure it finds. Scoring only starts once every input for
//! the band's dimension set has been accepted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, Result, TimeField};
use crate::model::{Dimension, GradeBand, InputKind, ReferenceModel};
use crate::rating::{evaluate_item, ItemResult};
use crate::scoring::{calculate_overall, OverallResult};
use crate::sleep;

/// Raw inputs for one evaluation request. Constructed fresh per request;
/// never persisted.
///
/// Measurement values are in the dimension's input unit: hours for
/// hours-kind dimensions, minutes for minutes-kind ones. Sleep is supplied
/// as the two clock strings instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationInput {
    /// Selected grade label (e.g. "grade-7")
    pub grade: Option<String>,
    /// Bed time as "HH:MM"
    pub bed_time: Option<String>,
    /// Wake time as "HH:MM"
    pub wake_time: Option<String>,
    /// Raw values for the non-sleep dimensions
    pub measurements: BTreeMap<Dimension, f64>,
}

/// Structured outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The grade label that was evaluated
    pub grade_label: String,
    /// Identifier of the resolved band
    pub band_id: String,
    /// Human label of the resolved band
    pub band_label: String,
    /// Derived sleep duration in hours, when the band tracks sleep
    pub sleep_hours: Option<f64>,
    /// Rating per evaluated dimension
    pub per_item: BTreeMap<Dimension, ItemResult>,
    /// Aggregate grade across all evaluated dimensions
    pub overall: OverallResult,
}

/// Evaluate one set of raw measurements against a reference model.
pub fn evaluate(model: &ReferenceModel, input: &EvaluationInput) -> Result<Evaluation> {
    let grade = input
        .grade
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .ok_or(EvaluationError::MissingGradeSelection)?;

    let band = model
        .band_for_grade(grade)
        .ok_or_else(|| EvaluationError::UnresolvedGradeBand {
            grade: grade.to_string(),
        })?;

    let values = validate_inputs(band, input)?;

    let mut per_item = BTreeMap::new();
    let mut levels = Vec::with_capacity(values.len());
    for (dimension, range) in &band.ranges {
        // Validation produced a value for every dimension the band declares.
        if let Some(hours) = values.get(dimension) {
            let result = evaluate_item(*hours, range);
            levels.push(result.level);
            per_item.insert(*dimension, result);
        }
    }

    let overall = calculate_overall(&levels);

    Ok(Evaluation {
        grade_label: grade.to_string(),
        band_id: band.id.clone(),
        band_label: band.label.clone(),
        sleep_hours: values.get(&Dimension::Sleep).copied(),
        per_item,
        overall,
    })
}

/// Convert and bounds-check every input the band needs, in dimension
/// order, producing values in hours. Fails on the first problem.
fn validate_inputs(
    band: &GradeBand,
    input: &EvaluationInput,
) -> Result<BTreeMap<Dimension, f64>> {
    let mut values = BTreeMap::new();

    for dimension in band.dimensions() {
        let hours = match dimension.input_kind() {
            InputKind::ClockTimes => {
                let bed = sleep::parse_clock(TimeField::Bed, input.bed_time.as_deref())?;
                let wake = sleep::parse_clock(TimeField::Wake, input.wake_time.as_deref())?;
                let hours = sleep::sleep_hours(bed, wake);
                if !sleep::is_plausible(hours) {
                    return Err(EvaluationError::ImplausibleSleepDuration { hours });
                }
                hours
            }
            kind => {
                let raw = input
                    .measurements
                    .get(&dimension)
                    .copied()
                    .filter(|raw| kind.accepts(*raw))
                    .ok_or(EvaluationError::MissingOrInvalidMeasurement { dimension })?;
                kind.to_hours(raw)
            }
        };
        values.insert(dimension, hours);
    }

    Ok(values)
}
