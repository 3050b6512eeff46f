//! Trace command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TraceConfig;
use crate::core::Parameters;
use crate::error::LcgError;

impl FromCommand for TraceConfig {
    fn from_command(command: Commands) -> Result<Self, LcgError> {
        match command {
            Commands::Trace {
                a,
                c,
                m,
                k,
                format,
                generator,
            } => TraceConfig::builder()
                .with_parameters(Parameters::new(a, c, m, k))
                .with_format(format)
                .with_overflow(generator.overflow)
                .with_max_steps(generator.max_steps)
                .build(),
            _ => Err(LcgError::ConfigurationError {
                message: "Invalid command type for TraceConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraceConfig);

/// Execute the trace command for a single generator
pub fn execute_trace_command(command: Commands) -> Result<()> {
    let config = TraceConfig::from_command(command)
        .wrap_err("Failed to parse trace command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::trace::TraceExecutor;
    TraceExecutor::execute(config)
}
