use std::path::PathBuf;

use clap::Subcommand;
use rhythmcheck_core::GradeBand;

use super::evaluate::load_model;

#[derive(Subcommand)]
pub enum BandsAction {
    /// List all grade bands and their reference ranges
    List {
        /// Custom reference model file (TOML)
        #[arg(long)]
        model: Option<PathBuf>,
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the band covering one grade label
    Show {
        /// Grade label (e.g. "grade-7")
        grade: String,
        /// Custom reference model file (TOML)
        #[arg(long)]
        model: Option<PathBuf>,
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BandsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BandsAction::List { model, json } => {
            let model = load_model(model.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(model.bands())?);
            } else {
                for band in model.bands() {
                    print_band(band);
                }
            }
        }
        BandsAction::Show { grade, model, json } => {
            let model = load_model(model.as_deref())?;
            let band = model
                .band_for_grade(&grade)
                .ok_or_else(|| format!("no grade band covers '{grade}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(band)?);
            } else {
                print_band(band);
            }
        }
    }
    Ok(())
}

fn print_band(band: &GradeBand) {
    println!("{} ({})", band.label, band.id);
    println!("  grades: {}", band.grades.join(", "));
    for (dimension, range) in &band.ranges {
        println!(
            "  {} {:<12} {:.1} - {:.1} h",
            dimension.emoji(),
            dimension.label(),
            range.min,
            range.max
        );
    }
    println!();
}
