//! Measure command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::core::OverflowMode;

/// Configuration for the measure command
///
/// This struct contains all options for reading test cases and reporting
/// their cycle lengths.
#[derive(Debug, Clone)]
pub struct MeasureConfig {
    /// File to read test cases from (None = stdin)
    pub input: Option<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Arithmetic used for a * x + c
    pub overflow: OverflowMode,
    /// Maximum sequence length per test case (None = unbounded)
    pub max_steps: Option<usize>,
    /// Keep each generated sequence for the report
    pub show_sequence: bool,
}

impl MeasureConfig {
    pub fn builder() -> MeasureConfigBuilder {
        MeasureConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct MeasureConfigBuilder {
    input: Option<Option<PathBuf>>,
    format: Option<OutputFormat>,
    overflow: Option<OverflowMode>,
    max_steps: Option<Option<usize>>,
    show_sequence: Option<bool>,
}

impl MeasureConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            format: None,
            overflow: None,
            max_steps: None,
            show_sequence: None,
        }
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = Some(input);
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
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_show_sequence(mut self, show_sequence: bool) -> Self {
        self.show_sequence = Some(show_sequence);
        self
    }
}

impl crate::common::ConfigBuilder for MeasureConfigBuilder {
    type Config = MeasureConfig;

    fn build(self) -> Result<Self::Config, crate::error::LcgError> {
        Ok(MeasureConfig {
            input: self.input.ok_or_else(|| crate::error::LcgError::ConfigurationError {
                message: "Missing required field: input".to_string(),
            })?,
            format: self.format.ok_or_else(|| crate::error::LcgError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            overflow: self.overflow.unwrap_or_default(),
            max_steps: self.max_steps.ok_or_else(|| {
                crate::error::LcgError::ConfigurationError {
                    message: "Missing required field: max_steps".to_string(),
                }
            })?,
            show_sequence: self.show_sequence.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::LcgError;

    #[test]
    fn test_build_complete_config() {
        let config = MeasureConfig::builder()
            .with_input(Some(PathBuf::from("cases.txt")))
            .with_format(OutputFormat::Json)
            .with_overflow(OverflowMode::Checked)
            .with_max_steps(Some(1000))
            .with_show_sequence(true)
            .build()
            .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("cases.txt")));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.overflow, OverflowMode::Checked);
        assert_eq!(config.max_steps, Some(1000));
        assert!(config.show_sequence);
    }

    #[test]
    fn test_optional_fields_default() {
        let config = MeasureConfig::builder()
            .with_input(None)
            .with_format(OutputFormat::Plain)
            .with_max_steps(None)
            .build()
            .unwrap();

        assert_eq!(config.overflow, OverflowMode::Exact);
        assert!(!config.show_sequence);
    }

    #[test]
    fn test_missing_format() {
        let result = MeasureConfig::builder()
            .with_input(None)
            .with_max_steps(None)
            .build();

        match result {
            Err(LcgError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: format");
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }
}
