//! # Configuration Module
//!
//! This module provides configuration structures for the lcg-cycle commands.
//! Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **MeasureConfig**: Configuration for the `measure` command that reads
//!   test cases and reports their cycle lengths
//! - **TraceConfig**: Configuration for the `trace` command that prints the
//!   sequence of a single generator
//!
//! ## Example
//!
//! ```
//! use lcg_cycle::ConfigBuilder;
//! use lcg_cycle::cli::OutputFormat;
//! use lcg_cycle::config::{MeasureConfig, TraceConfig};
//! use lcg_cycle::core::{OverflowMode, Parameters};
//!
//! # fn main() -> Result<(), lcg_cycle::error::LcgError> {
//! let measure = MeasureConfig::builder()
//!     .with_input(None)
//!     .with_format(OutputFormat::Plain)
//!     .with_overflow(OverflowMode::Wrapping)
//!     .with_max_steps(Some(1_000_000))
//!     .build()?;
//! assert_eq!(measure.max_steps, Some(1_000_000));
//!
//! let trace = TraceConfig::builder()
//!     .with_parameters(Parameters::new(1, 1, 4, 2))
//!     .build()?;
//! assert_eq!(trace.format, OutputFormat::Human);
//! # Ok(())
//! # }
//! ```

pub mod measure;
pub mod trace;

pub use measure::MeasureConfig;
pub use trace::TraceConfig;
