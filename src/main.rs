//! Build Profile CLI
//!
//! Summarizes a build tool's profiling database: counts, timings,
//! parallelism of the last run, and the critical path.

use anyhow::Result;
use build_profile::commands::{
    display_version, execute_summary, validate_args, validate_profile_file, SummaryArgs,
};
use build_profile::utils::config::{DEFAULT_PROFILE_PATH, DEFAULT_REPORT_PATH};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Build Profile - summary statistics for build profiling databases
#[derive(Parser, Debug)]
#[command(name = "build-profile")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a profiling database
    Summary {
        /// Path to the profiling database JSON
        #[arg(short, long, env = "BUILD_PROFILE", default_value = DEFAULT_PROFILE_PATH)]
        profile: PathBuf,

        /// Write a JSON report (defaults to summary.json when given without a path)
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_REPORT_PATH)]
        output: Option<PathBuf>,

        /// Do not print the text summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate a profiling database file
    Validate {
        /// Path to the profiling database JSON
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Summary {
            profile,
            output,
            quiet,
        } => {
            let args = SummaryArgs {
                profile,
                output_json: output,
                print_summary: !quiet,
            };

            validate_args(&args)?;
            execute_summary(&args)?;
        }

        Commands::Validate { file } => {
            validate_profile_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
