//! Core types shared by the analyzer, input parsing and reports

pub mod types;

pub use types::{CycleMeasurement, OverflowMode, Parameters};
