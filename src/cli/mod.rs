//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Colswap using clap.

use crate::pipeline::RunOptions;
use clap::Parser;
use std::path::PathBuf;

/// Colswap - randomly swaps values between specified columns in a dataset
#[derive(Parser, Debug)]
#[command(name = "colswap")]
#[command(version, about, long_about = None)]
#[command(author = "Colswap Contributors")]
pub struct Cli {
    /// Path to the data file (.csv, .xlsx, or .xls)
    pub data_file: PathBuf,

    /// Path to the YAML configuration file
    pub config_file: PathBuf,

    /// Path to the output file (always written as CSV)
    #[arg(short = 'o', long = "output_file", default_value = "masked_data.csv")]
    pub output_file: PathBuf,

    /// Logging level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(short = 'l', long = "log_level", default_value = "INFO")]
    pub log_level: String,

    /// Master random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Resolves the parsed arguments into pipeline options
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            data_file: self.data_file.clone(),
            config_file: self.config_file.clone(),
            output_file: self.output_file.clone(),
            seed: self.seed,
        }
    }
}
