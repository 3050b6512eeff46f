//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;

use serde::Serialize;

/// Parameters of the recurrence `X(n+1) = (a * X(n) + c) mod m`, `X(0) = k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Parameters {
    /// Multiplier
    pub a: i64,
    /// Increment
    pub c: i64,
    /// Modulus
    pub m: i64,
    /// Seed
    pub k: i64,
}

impl Parameters {
    pub fn new(a: i64, c: i64, m: i64, k: i64) -> Self {
        Self { a, c, m, k }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a = {} c = {} m = {} k = {}", self.a, self.c, self.m, self.k)
    }
}

/// How the intermediate `a * x + c` is computed before reduction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Widen to 128 bits; never truncates
    #[default]
    Exact,
    /// 64-bit two's complement wraparound
    Wrapping,
    /// 64-bit arithmetic, overflow is an error
    Checked,
}

impl fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowMode::Exact => write!(f, "exact"),
            OverflowMode::Wrapping => write!(f, "wrapping"),
            OverflowMode::Checked => write!(f, "checked"),
        }
    }
}

/// Outcome of measuring one generated sequence
///
/// `prefix_length` is the index of the first occurrence of the repeating
/// value, `meeting_position` the index where it reappeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleMeasurement {
    pub prefix_length: usize,
    pub cycle_length: usize,
    pub meeting_position: usize,
    pub repeating_value: Option<i64>,
}

impl CycleMeasurement {
    /// Measurement for the zero modulus, where no sequence exists
    pub fn degenerate() -> Self {
        Self {
            prefix_length: 0,
            cycle_length: 0,
            meeting_position: 0,
            repeating_value: None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.repeating_value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_display() {
        let params = Parameters::new(1, 2, 3, 4);
        assert_eq!(params.to_string(), "a = 1 c = 2 m = 3 k = 4");
    }

    #[test]
    fn test_overflow_mode_default_and_display() {
        assert_eq!(OverflowMode::default(), OverflowMode::Exact);
        assert_eq!(OverflowMode::Wrapping.to_string(), "wrapping");
        assert_eq!(
            serde_json::to_value(OverflowMode::Checked).unwrap(),
            serde_json::json!("checked")
        );
    }

    #[test]
    fn test_degenerate_measurement() {
        let measurement = CycleMeasurement::degenerate();
        assert!(measurement.is_degenerate());
        assert_eq!(measurement.cycle_length, 0);
    }
}
