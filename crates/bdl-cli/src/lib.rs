//! Random sampling of BDL statistical variables into CSV.
//!
//! The binary lists every variable of one subject through `bdl-client`,
//! draws a uniform sample without replacement and writes `(id, name)`
//! pairs to a CSV file.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Dependencies used only by main.rs
use anyhow as _;
use dotenvy as _;
use tokio as _;

pub mod config;
pub mod csv_export;
pub mod error;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod sampling;

// Re-export primary types for convenient access
pub use config::ExportConfig;
pub use csv_export::{CSV_HEADER, write_variables_csv};
pub use error::ExportError;
pub use logging::init_tracing;
pub use parser::Cli;
pub use pipeline::{ExportSummary, print_page_progress, run_export};
pub use sampling::sample_variables;
