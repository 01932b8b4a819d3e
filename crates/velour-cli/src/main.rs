//! Velour CLI — simulation, benchmarking, and input validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "velour")]
#[command(version, about = "Velour — cloth and hair simulation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a config file.
    Simulate {
        /// Path to simulation config (TOML).
        #[arg(short, long, default_value = "simulation.toml")]
        config: String,
    },

    /// Run benchmark suite.
    Bench {
        /// Which scenario to run (draped_garment, wind_gust,
        /// hair_shake, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Cloth material preset for cloth scenarios.
        #[arg(short, long)]
        material: Option<String>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a simulation input file.
    Validate {
        /// Path to a config (.toml) or body spec (.json) file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { config } => commands::simulate(&config),
        Commands::Bench {
            scenario,
            material,
            output,
        } => commands::bench(&scenario, material.as_deref(), output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
