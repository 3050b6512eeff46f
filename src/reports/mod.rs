//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - plain: one cycle length per line, the canonical output
//! - human: styled console output echoing parameters and sequences
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;
pub mod plain;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::{CycleMeasurement, Parameters};
use crate::error::LcgError;

/// Result of measuring one test case
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// 1-based position of the case in the input
    pub case: usize,
    pub parameters: Parameters,
    pub measurement: CycleMeasurement,
    /// Generated sequence, kept only when the report displays it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Vec<i64>>,
}

impl CaseReport {
    pub fn new(case: usize, parameters: Parameters, measurement: CycleMeasurement) -> Self {
        Self {
            case,
            parameters,
            measurement,
            sequence: None,
        }
    }

    pub fn with_sequence(mut self, sequence: Vec<i64>) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Elements before the cycle starts
    pub fn prefix(&self) -> Option<&[i64]> {
        let sequence = self.sequence.as_deref()?;
        sequence.get(..self.measurement.prefix_length)
    }

    /// One full period, starting at the first occurrence of the repeating
    /// value
    pub fn cycle(&self) -> Option<&[i64]> {
        let sequence = self.sequence.as_deref()?;
        sequence.get(self.measurement.prefix_length..self.measurement.meeting_position)
    }
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from measured test cases
    fn generate_report(&self, cases: &[CaseReport]) -> Result<String, LcgError>;
}

/// Generate a report with the generator matching `format`
pub fn generate_report(format: OutputFormat, cases: &[CaseReport]) -> Result<String, LcgError> {
    match format {
        OutputFormat::Plain => PlainReportGenerator::new().generate_report(cases),
        OutputFormat::Human => HumanReportGenerator::new().generate_report(cases),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(cases),
    }
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use plain::PlainReportGenerator;

#[cfg(test)]
pub(crate) mod test_support {
    use super::CaseReport;
    use crate::analyzer::CycleAnalyzer;
    use crate::core::Parameters;

    pub fn measured_case(case: usize, parameters: Parameters, keep_sequence: bool) -> CaseReport {
        let mut analyzer = CycleAnalyzer::new();
        analyzer.set_parameters(parameters);
        let measurement = analyzer.measure().unwrap();
        let report = CaseReport::new(case, parameters, measurement);

        if keep_sequence {
            report.with_sequence(analyzer.sequence().to_vec())
        } else {
            report
        }
    }
}
