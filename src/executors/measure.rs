//! Measure command executor

use std::io::{Read, Write};

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::analyzer::CycleAnalyzer;
use crate::config::MeasureConfig;
use crate::constants::{STDIN_NAME, progress::MIN_CASES_FOR_BAR};
use crate::core::{OverflowMode, Parameters};
use crate::error::LcgError;
use crate::executors::CommandExecutor;
use crate::input;
use crate::progress::ProgressReporter;
use crate::reports::{self, CaseReport};

pub struct MeasureExecutor;

impl CommandExecutor for MeasureExecutor {
    type Config = MeasureConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        Self::execute_with_io(
            config,
            stdin.lock(),
            &mut stdout,
            ProgressReporter::for_terminal(),
        )
    }
}

impl MeasureExecutor {
    /// Run the measure command against explicit streams
    ///
    /// `stdin` is only read when the config names no input file.
    pub fn execute_with_io<R: Read, W: Write>(
        config: MeasureConfig,
        stdin: R,
        out: &mut W,
        mut progress: Option<ProgressReporter>,
    ) -> Result<()> {
        let cases = match &config.input {
            Some(path) => input::read_cases_from_file(path),
            None => input::read_cases(STDIN_NAME, stdin),
        }
        .wrap_err("Failed to read test cases")?;

        info!(
            cases = cases.len(),
            overflow = %config.overflow,
            max_steps = ?config.max_steps,
            "measuring test cases"
        );

        if cases.len() < MIN_CASES_FOR_BAR {
            progress = None;
        }
        if let Some(p) = progress.as_mut() {
            p.start_measuring(cases.len());
        }

        let mut case_reports = Vec::with_capacity(cases.len());
        for (index, parameters) in cases.into_iter().enumerate() {
            let case = index + 1;
            let report = measure_case(
                case,
                parameters,
                config.overflow,
                config.max_steps,
                config.show_sequence,
            )
            .wrap_err_with(|| format!("Failed to measure test case #{case} ({parameters})"))?;

            if let Some(p) = progress.as_ref() {
                p.case_measured(case);
            }
            case_reports.push(report);
        }

        if let Some(p) = progress.as_mut() {
            p.finish_measuring(case_reports.len());
        }

        let report = reports::generate_report(config.format, &case_reports)
            .wrap_err("Failed to generate report")?;

        out.write_all(report.as_bytes())
            .into_diagnostic()
            .wrap_err("Failed to write report")?;

        Ok(())
    }
}

/// Measure one test case with a freshly built analyzer
pub fn measure_case(
    case: usize,
    parameters: Parameters,
    overflow: OverflowMode,
    max_steps: Option<usize>,
    keep_sequence: bool,
) -> Result<CaseReport, LcgError> {
    let mut analyzer = CycleAnalyzer::new()
        .with_overflow(overflow)
        .with_step_limit(max_steps);
    analyzer.set_parameters(parameters);

    let measurement = analyzer.measure()?;
    let report = CaseReport::new(case, parameters, measurement);

    Ok(if keep_sequence {
        report.with_sequence(analyzer.sequence().to_vec())
    } else {
        report
    })
}
