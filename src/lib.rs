// Colswap - Column Pair Permutation Anonymizer
// Copyright (c) 2025 Colswap Contributors
// Licensed under the MIT License

//! # Colswap - Column Pair Permutation Anonymizer
//!
//! Colswap anonymizes tabular data by randomly permuting values within
//! configured column pairs, breaking the row-wise correlation between a
//! record's attributes while preserving each column's marginal value
//! distribution exactly.
//!
//! ## Overview
//!
//! The tool reads a data file (CSV or Excel), a YAML configuration naming
//! the column pairs to swap, and writes the masked table as CSV:
//!
//! - **Loading** the table from `.csv`, `.xlsx`, or `.xls` files
//! - **Validating** the `columns_to_swap` pair list from YAML
//! - **Swapping** each configured pair with an independent random permutation
//! - **Writing** the masked table as CSV, only after the full transformation
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`pipeline`] - Load, swap, write orchestration
//! - [`engine`] - The column permutation engine
//! - [`adapters`] - Table readers and the CSV writer
//! - [`domain`] - Table, column pair, and error types
//! - [`config`] - Configuration loading and validation
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use colswap::config::load_config;
//! use colswap::engine::apply_swaps;
//! use colswap::adapters::{load_table, write_table};
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pairs = load_config("swap_config.yaml")?;
//!     let mut table = load_table("patients.csv".as_ref())?;
//!
//!     let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!     apply_swaps(&mut table, &pairs, &mut rng);
//!
//!     write_table(&table, "masked_data.csv".as_ref())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Swap semantics
//!
//! For a configured pair `(A, B)` the engine assigns `B := original A`
//! (unpermuted) and `A := a random permutation of the original B`. The
//! operation is deliberately asymmetric; see [`engine::apply_swaps`] for the
//! full contract, including the handling of missing columns and of pairs
//! that share a column.
//!
//! ## Error Handling
//!
//! Colswap uses the [`domain::SwapError`] type for all errors:
//!
//! ```rust,no_run
//! use colswap::domain::SwapError;
//!
//! fn example() -> Result<(), SwapError> {
//!     let pairs = colswap::config::load_config("swap_config.yaml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Colswap uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting run");
//! warn!(column = "zipcode", "Column not found, skipping pair");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod pipeline;
