//! Configuration constants for lcg-cycle
//!
//! This module contains the defaults used throughout the application. CLI
//! flags and their `LCG_CYCLE_*` environment variables override them.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Fewer cases than this finish too fast to need a progress bar
    pub const MIN_CASES_FOR_BAR: usize = 2;
}

/// Output formatting configuration
pub mod output {
    /// Default output format of the measure command
    pub const DEFAULT_FORMAT: &str = "plain";

    /// Default output format of the trace command
    pub const DEFAULT_TRACE_FORMAT: &str = "human";
}

/// Generator arithmetic configuration
pub mod generator {
    /// Default overflow mode
    pub const DEFAULT_OVERFLOW: &str = "exact";
}

/// Name used for stdin in diagnostics
pub const STDIN_NAME: &str = "<stdin>";
