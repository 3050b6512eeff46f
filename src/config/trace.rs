//! Trace command configuration

use crate::cli::OutputFormat;
use crate::core::{OverflowMode, Parameters};
use crate::error::LcgError;

/// Configuration for the trace command
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Generator to trace
    pub parameters: Parameters,
    /// Output format for the report
    pub format: OutputFormat,
    /// Arithmetic used for a * x + c
    pub overflow: OverflowMode,
    /// Maximum sequence length (None = unbounded)
    pub max_steps: Option<usize>,
}

impl TraceConfig {
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct TraceConfigBuilder {
    parameters: Option<Parameters>,
    format: Option<OutputFormat>,
    overflow: Option<OverflowMode>,
    max_steps: Option<usize>,
}

impl TraceConfigBuilder {
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl crate::common::ConfigBuilder for TraceConfigBuilder {
    type Config = TraceConfig;

    fn build(self) -> Result<Self::Config, LcgError> {
        let parameters = self
            .parameters
            .ok_or_else(|| LcgError::ConfigurationError {
                message: "Missing required field: parameters".to_string(),
            })?;

        Ok(TraceConfig {
            parameters,
            format: self.format.unwrap_or(OutputFormat::Human),
            overflow: self.overflow.unwrap_or_default(),
            max_steps: self.max_steps,
        })
    }
}
