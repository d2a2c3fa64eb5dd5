use clap::Args;
use rhythmcheck_core::{sleep, TimeField};

#[derive(Args)]
pub struct SleepArgs {
    /// Bed time as HH:MM
    #[arg(long)]
    pub bed: String,
    /// Wake time as HH:MM
    #[arg(long)]
    pub wake: String,
}

pub fn run(args: SleepArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bed = sleep::parse_clock(TimeField::Bed, Some(&args.bed))?;
    let wake = sleep::parse_clock(TimeField::Wake, Some(&args.wake))?;
    let hours = sleep::sleep_hours(bed, wake);

    if sleep::is_plausible(hours) {
        println!("Estimated sleep: {:.1} h", hours);
    } else {
        // Mirror the evaluation engine's stance: report, never clamp.
        println!(
            "Estimated sleep: {:.1} h -- that looks implausible, please check the inputs",
            hours
        );
    }
    Ok(())
}
