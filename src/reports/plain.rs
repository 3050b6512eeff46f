//! Plain report: one cycle length per line

use std::fmt::Write;

use super::{CaseReport, ReportGenerator};
use crate::error::LcgError;

pub struct PlainReportGenerator;

impl Default for PlainReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for PlainReportGenerator {
    fn generate_report(&self, cases: &[CaseReport]) -> Result<String, LcgError> {
        let mut output = String::new();
        for case in cases {
            writeln!(output, "{}", case.measurement.cycle_length)?;
        }
        Ok(output)
    }
}
