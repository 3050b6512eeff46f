//! Measure command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::MeasureConfig;
use crate::error::LcgError;

impl FromCommand for MeasureConfig {
    fn from_command(command: Commands) -> Result<Self, LcgError> {
        match command {
            Commands::Measure {
                input,
                format,
                generator,
                show_sequence,
            } => MeasureConfig::builder()
                .with_input(input)
                .with_format(format.format)
                .with_overflow(generator.overflow)
                .with_max_steps(generator.max_steps)
                .with_show_sequence(show_sequence)
                .build(),
            _ => Err(LcgError::ConfigurationError {
                message: "Invalid command type for MeasureConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(MeasureConfig);

/// Execute the measure command over the configured input
pub fn execute_measure_command(command: Commands) -> Result<()> {
    let config = MeasureConfig::from_command(command)
        .wrap_err("Failed to parse measure command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::measure::MeasureExecutor;
    MeasureExecutor::execute(config)
}
