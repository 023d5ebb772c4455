//! Configuration management
//!
//! This module loads and validates the YAML swap configuration. The file
//! must be a mapping containing the key `columns_to_swap`, whose value is a
//! sequence of two-element sequences of column names:
//!
//! ```yaml
//! columns_to_swap:
//!   - [age, city]
//!   - [salary, department]
//! ```
//!
//! Any deviation from that shape is a fatal validation error; the run
//! produces no output. Unknown extra keys in the mapping are ignored.
//!
//! # Example
//!
//! ```no_run
//! use colswap::config::load_config;
//!
//! let pairs = load_config("swap_config.yaml").expect("invalid configuration");
//! for pair in &pairs {
//!     println!("swapping {pair}");
//! }
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::SwapConfig;
