use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rhythmcheck-cli", version, about = "Rhythmcheck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a day's routine against the reference model
    Evaluate(commands::evaluate::EvaluateArgs),
    /// Estimate sleep duration from bed and wake times
    Sleep(commands::sleep::SleepArgs),
    /// Inspect the grade-band reference data
    Bands {
        #[command(subcommand)]
        action: commands::bands::BandsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::Sleep(args) => commands::sleep::run(args),
        Commands::Bands { action } => commands::bands::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
