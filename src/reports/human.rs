//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{CaseReport, ReportGenerator};
use crate::error::LcgError;
use crate::utils::string::{join_values, pluralize};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn write_case(&self, output: &mut String, case: &CaseReport) -> Result<(), LcgError> {
        writeln!(
            output,
            "{} Case #{}: {}",
            style("🎲").cyan(),
            case.case,
            style(case.parameters).bold()
        )?;

        let measurement = &case.measurement;
        if measurement.is_degenerate() {
            writeln!(
                output,
                "  {} Zero modulus: no sequence generated, cycle length {}",
                style("ℹ").blue(),
                style(0).yellow().bold()
            )?;
            return Ok(());
        }

        writeln!(
            output,
            "  {} Cycle length: {}",
            style("→").dim(),
            style(measurement.cycle_length).green().bold()
        )?;
        writeln!(
            output,
            "  {} Prefix length: {}",
            style("→").dim(),
            style(measurement.prefix_length).yellow()
        )?;

        if let Some(value) = measurement.repeating_value {
            writeln!(
                output,
                "  {} First repeat: {} at position {}",
                style("→").dim(),
                style(value).cyan(),
                measurement.meeting_position
            )?;
        }

        if let (Some(prefix), Some(cycle)) = (case.prefix(), case.cycle()) {
            if !prefix.is_empty() {
                writeln!(
                    output,
                    "  {} Prefix: {}",
                    style("•").dim(),
                    style(join_values(prefix)).dim()
                )?;
            }
            writeln!(output, "  {} Cycle: {}", style("🔄").yellow(), join_values(cycle))?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, cases: &[CaseReport]) -> Result<String, LcgError> {
        let mut output = String::new();

        if cases.is_empty() {
            writeln!(output, "{} No test cases to measure", style("ℹ").blue())?;
            return Ok(output);
        }

        for case in cases {
            self.write_case(&mut output, case)?;
            writeln!(output)?;
        }

        let longest = cases
            .iter()
            .map(|case| case.measurement.cycle_length)
            .max()
            .unwrap_or(0);

        writeln!(
            output,
            "{} Measured {} {}, longest cycle {}",
            style("✓").green().bold(),
            style(cases.len()).yellow().bold(),
            pluralize("case", cases.len()),
            style(longest).green().bold()
        )?;

        Ok(output)
    }
}
