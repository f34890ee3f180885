//! Sartor CLI — draping runs, procedural scenarios, and inspection.

use clap::{Parser, Subcommand};

mod commands;
mod scenarios;

#[derive(Parser)]
#[command(name = "sartor")]
#[command(version, about = "Sartor — mass-spring garment draping engine")]
struct Cli {
    /// Emit per-step telemetry via tracing.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a draping simulation from an input file.
    Simulate {
        /// Path to drape input (JSON).
        input: String,

        /// Output frame dump path.
        #[arg(short, long, default_value = "frames.bin")]
        output: String,
    },

    /// Run a procedural scenario.
    Scenario {
        /// Which scenario to run (ground_drop, sphere_drape, body_drape).
        #[arg(short, long, default_value = "ground_drop")]
        name: String,

        /// Override the scenario's step count.
        #[arg(short, long)]
        steps: Option<u32>,

        /// Output frame dump path.
        #[arg(short, long, default_value = "frames.bin")]
        output: String,
    },

    /// Inspect a recorded frame dump.
    Inspect {
        /// Path to frame dump file.
        path: String,
    },

    /// Validate a drape input or mesh file.
    Validate {
        /// Path to input or mesh file (JSON).
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let result = match cli.command {
        Commands::Simulate { input, output } => commands::simulate(&input, &output, cli.verbose),
        Commands::Scenario {
            name,
            steps,
            output,
        } => commands::scenario(&name, steps, &output, cli.verbose),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
