//! Domain models and types for Colswap.
//!
//! This module contains the core domain models and business rules for the
//! column swap transformation.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The tabular data model** ([`Table`], [`Column`])
//! - **The swap target** ([`ColumnPair`])
//! - **Error types** ([`SwapError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SwapError>`]:
//!
//! ```rust
//! use colswap::domain::{Result, SwapError};
//!
//! fn example() -> Result<()> {
//!     let pairs = colswap::config::load_config("swap_config.yaml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use errors::SwapError;
pub use result::Result;
pub use table::{Column, ColumnPair, Table};
