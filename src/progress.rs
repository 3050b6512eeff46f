use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

/// Progress display for runs over many test cases, drawn on stderr
pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    /// A reporter if stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn start_measuring(&mut self, total_cases: usize) {
        let pb = ProgressBar::new(total_cases as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Measuring cycles");
        pb.enable_steady_tick(TICK_INTERVAL);
        self.current_bar = Some(pb);
    }

    pub fn case_measured(&self, case: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Measured case #{case}"));
            pb.inc(1);
        }
    }

    pub fn finish_measuring(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Measured {} test case{}",
            style("✓").green(),
            style(count).yellow().bold(),
            if count == 1 { "" } else { "s" }
        );
    }
}
