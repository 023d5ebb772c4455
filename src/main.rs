// Colswap - Column Pair Permutation Anonymizer
// Copyright (c) 2025 Colswap Contributors
// Licensed under the MIT License

use clap::Parser;
use colswap::cli::Cli;
use colswap::logging::init_logging;
use colswap::pipeline;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; an invalid level falls back to INFO inside
    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        return;
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting colswap");

    // All fatal conditions are handled here: log and return without output,
    // never a user-visible panic, no nontrivial exit codes
    let options = cli.run_options();
    if let Err(e) = pipeline::run(&options) {
        tracing::error!(error = %e, "Run failed, no output written");
    }

    tracing::info!("colswap completed");
}
