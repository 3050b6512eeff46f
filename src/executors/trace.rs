//! Trace command executor

use std::io::Write;

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::config::TraceConfig;
use crate::executors::CommandExecutor;
use crate::executors::measure::measure_case;
use crate::reports;

pub struct TraceExecutor;

impl CommandExecutor for TraceExecutor {
    type Config = TraceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        Self::execute_with_output(config, &mut std::io::stdout())
    }
}

impl TraceExecutor {
    pub fn execute_with_output<W: Write>(config: TraceConfig, out: &mut W) -> Result<()> {
        debug!(parameters = %config.parameters, "tracing generator");

        let report = measure_case(
            1,
            config.parameters,
            config.overflow,
            config.max_steps,
            true,
        )
        .wrap_err_with(|| format!("Failed to trace generator ({})", config.parameters))?;

        let output = reports::generate_report(config.format, std::slice::from_ref(&report))
            .wrap_err("Failed to generate report")?;

        out.write_all(output.as_bytes())
            .into_diagnostic()
            .wrap_err("Failed to write report")?;

        Ok(())
    }
}
