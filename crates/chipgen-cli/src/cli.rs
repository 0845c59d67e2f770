//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chipgen: chipset matrix converter
#[derive(Parser)]
#[command(name = "chipgen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a chipset matrix into info records
    Generate {
        /// Path to the vendor matrix (CSV)
        #[arg(value_name = "MATRIX")]
        matrix: PathBuf,

        /// Output path for the records (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory the per-family depends files live under
        #[arg(long, default_value = ".")]
        deps_root: PathBuf,
    },

    /// Run the conversion without emitting records and report a summary
    Check {
        /// Path to the vendor matrix (CSV)
        #[arg(value_name = "MATRIX")]
        matrix: PathBuf,

        /// Directory the per-family depends files live under
        #[arg(long, default_value = ".")]
        deps_root: PathBuf,

        /// Output the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
