//! JSON format report generation

use serde_json::json;

use super::{CaseReport, ReportGenerator};
use crate::error::LcgError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, cases: &[CaseReport]) -> Result<String, LcgError> {
        let report = json!({
            "case_count": cases.len(),
            "cases": cases,
        });

        serde_json::to_string_pretty(&report).map_err(LcgError::Json)
    }
}
