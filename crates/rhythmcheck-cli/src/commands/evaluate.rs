use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use rhythmcheck_core::{evaluate, Dimension, Evaluation, EvaluationInput, ReferenceModel};

#[derive(Args)]
pub struct EvaluateArgs {
    /// Grade label (e.g. "grade-7")
    #[arg(long)]
    pub grade: String,
    /// Bed time as HH:MM
    #[arg(long)]
    pub bed: Option<String>,
    /// Wake time as HH:MM
    #[arg(long)]
    pub wake: Option<String>,
    /// Home study in hours
    #[arg(long)]
    pub study: Option<f64>,
    /// Exercise in hours
    #[arg(long)]
    pub exercise: Option<f64>,
    /// Screen time in hours
    #[arg(long)]
    pub screen: Option<f64>,
    /// Reading in minutes
    #[arg(long)]
    pub reading: Option<f64>,
    /// Custom reference model file (TOML); defaults to the built-in model
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: EvaluateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_model(args.model.as_deref())?;

    let mut measurements = BTreeMap::new();
    for (dimension, value) in [
        (Dimension::Study, args.study),
        (Dimension::Exercise, args.exercise),
        (Dimension::Screen, args.screen),
        (Dimension::Reading, args.reading),
    ] {
        if let Some(value) = value {
            measurements.insert(dimension, value);
        }
    }

    let input = EvaluationInput {
        grade: Some(args.grade),
        bed_time: args.bed,
        wake_time: args.wake,
        measurements,
    };

    let evaluation = evaluate(&model, &input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print_text(&evaluation);
    }
    Ok(())
}

pub(crate) fn load_model(
    path: Option<&std::path::Path>,
) -> Result<ReferenceModel, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(ReferenceModel::from_toml_str(&text)?)
        }
        None => Ok(ReferenceModel::builtin()),
    }
}

fn print_text(evaluation: &Evaluation) {
    println!(
        "Overall: {}  (total {})",
        evaluation.overall.grade, evaluation.overall.total
    );
    println!("  {}", evaluation.overall.comment);
    println!();

    for (dimension, item) in &evaluation.per_item {
        println!(
            "{} {:<12} {}  {}",
            dimension.emoji(),
            dimension.label(),
            item.mark,
            item.full_comment
        );
    }

    if let Some(hours) = evaluation.sleep_hours {
        println!();
        // One decimal, matching the estimated-duration display.
        println!("Estimated sleep: {:.1} h", hours);
    }
}
