//! # csv-pivot
//!
//! Transposes a row-oriented comma separated table into its column-oriented
//! equivalent with a map/shuffle/reduce pipeline.
//!
//! ## Usage
//!
//! ```bash
//! csv-pivot transpose table.csv [--format json] [--pad] [-p 8]
//! ```
//!
//! ## Modules
//!
//! - `transpose` - The pure map, shuffle and reduce functions and their records
//! - `pipeline` - Input readers, groupers and the harness that runs a table through
//! - `output` - Rendering results and intermediate stages
//! - `config` - Configuration loading from TOML files and the environment
//! - `error` - The crate-wide error type with numbered error codes
//! - `cli` - Command line parsing and command implementations
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod transpose;
