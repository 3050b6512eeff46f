//! Command implementations for the lcg-cycle CLI
//!
//! This module contains the implementations for each CLI command:
//! - measure: Measure the cycle length of every test case in the input
//! - trace: Trace the sequence of a single generator

pub mod measure;
pub mod trace;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Measure { .. } => measure::execute_measure_command(command),
        Commands::Trace { .. } => trace::execute_trace_command(command),
    }
}
