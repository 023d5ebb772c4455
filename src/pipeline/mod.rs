//! Run orchestration
//!
//! The pipeline owns the load, swap, write sequence: configuration first,
//! then the data file, then the engine over every configured pair, and only
//! after the full transformation completes is the output file created. A
//! failure at any stage therefore never leaves a partial output file behind.

use crate::adapters;
use crate::config;
use crate::domain::result::Result;
use crate::engine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

/// Everything a run needs, resolved from the CLI
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the data file (`.csv`, `.xlsx`, or `.xls`)
    pub data_file: PathBuf,
    /// Path to the YAML configuration file
    pub config_file: PathBuf,
    /// Destination path for the masked CSV
    pub output_file: PathBuf,
    /// Master seed for reproducible runs; `None` draws from entropy
    pub seed: Option<u64>,
}

/// Executes a full run: load config, load table, swap, write CSV
///
/// # Errors
///
/// Propagates every fatal condition as a
/// [`SwapError`](crate::domain::SwapError): invalid configuration, missing
/// or empty or unsupported data file, and I/O failures while writing. Pairs
/// referencing missing columns are not fatal; the engine skips them with a
/// warning and the output reflects the pairs that succeeded.
pub fn run(options: &RunOptions) -> Result<()> {
    let pairs = config::load_config(&options.config_file)?;

    let mut table = adapters::load_table(&options.data_file)?;
    info!(
        data_file = %options.data_file.display(),
        rows = table.num_rows(),
        columns = table.num_columns(),
        "Loaded data"
    );

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    engine::apply_swaps(&mut table, &pairs, &mut rng);

    adapters::write_table(&table, &options.output_file)?;
    info!(
        output_file = %options.output_file.display(),
        "Masked data saved"
    );

    Ok(())
}
