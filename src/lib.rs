//! # lcg-cycle - Measure the Cycles of Linear Congruential Generators
//!
//! A linear congruential generator produces `X(n+1) = (a * X(n) + c) mod m`
//! from a seed `X(0) = k`. Over a finite modulus the sequence must repeat,
//! possibly after a non-repeating prefix. lcg-cycle generates the sequence
//! until the first repeated value and reports the length of the cycle it
//! entered.
//!
//! ## Main Components
//!
//! - **Analyzer**: Generates sequences and measures prefix and cycle lengths
//! - **Input**: Parses the test case count and `a c m k` groups
//! - **Reports**: Generates plain, human-readable and JSON reports
//!
//! ## Usage
//!
//! ### Measuring a Single Generator
//!
//! ```
//! use lcg_cycle::analyzer::CycleAnalyzer;
//! use lcg_cycle::core::Parameters;
//!
//! # fn main() -> Result<(), lcg_cycle::error::LcgError> {
//! let mut analyzer = CycleAnalyzer::new();
//! analyzer.set_parameters(Parameters::new(2643, 173052, 2029, 9));
//!
//! assert_eq!(analyzer.calculate_cycle_length()?, 2028);
//!
//! // Reconfiguring discards the previous sequence
//! analyzer.set_parameters(Parameters::new(1, 1, 4, 2));
//! assert!(analyzer.sequence().is_empty());
//! assert_eq!(analyzer.calculate_cycle_length()?, 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Choosing the Overflow Behavior
//!
//! ```
//! use lcg_cycle::analyzer::CycleAnalyzer;
//! use lcg_cycle::core::{OverflowMode, Parameters};
//! use lcg_cycle::error::LcgError;
//!
//! let mut analyzer = CycleAnalyzer::new()
//!     .with_overflow(OverflowMode::Checked)
//!     .with_step_limit(Some(1_000_000));
//! analyzer.set_parameters(Parameters::new(i64::MAX, 1, 97, 5));
//!
//! assert!(matches!(
//!     analyzer.calculate_cycle_length(),
//!     Err(LcgError::ArithmeticOverflow { .. })
//! ));
//! ```
//!
//! ### Processing a Batch of Test Cases
//!
//! ```
//! use lcg_cycle::analyzer::CycleAnalyzer;
//! use lcg_cycle::input::parse_cases;
//! use lcg_cycle::reports::{CaseReport, PlainReportGenerator, ReportGenerator};
//!
//! # fn main() -> Result<(), lcg_cycle::error::LcgError> {
//! let cases = parse_cases("example", "2\n1 1 4 2\n0 0 0 0\n")?;
//!
//! let mut reports = Vec::new();
//! for (index, parameters) in cases.into_iter().enumerate() {
//!     // A fresh analyzer per case keeps no state between cases
//!     let mut analyzer = CycleAnalyzer::new();
//!     analyzer.set_parameters(parameters);
//!     reports.push(CaseReport::new(index + 1, parameters, analyzer.measure()?));
//! }
//!
//! let output = PlainReportGenerator::new().generate_report(&reports)?;
//! assert_eq!(output, "4\n0\n");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod input;
pub mod reports;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    execute_command(cli.command)
}
