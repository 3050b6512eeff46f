//! Common functionality shared across commands

use clap::Args;

use crate::core::OverflowMode;

/// Arithmetic and resource options for the generator
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// How to compute a * x + c before reducing modulo m
    #[arg(long, value_enum, default_value = crate::constants::generator::DEFAULT_OVERFLOW, env = "LCG_CYCLE_OVERFLOW")]
    pub overflow: OverflowMode,

    /// Fail a test case once its sequence grows past this many elements
    #[arg(long, value_name = "STEPS", env = "LCG_CYCLE_MAX_STEPS")]
    pub max_steps: Option<usize>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "LCG_CYCLE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::LcgError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::LcgError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::LcgError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
