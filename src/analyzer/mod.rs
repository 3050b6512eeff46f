//! # Cycle Analysis Module
//!
//! This module generates linear congruential generator sequences and measures
//! their cycles. A generator `X(n+1) = (a * X(n) + c) mod m` started at
//! `X(0) = k` may run through a non-repeating prefix before it enters its
//! cycle, so the measurement reports both lengths.
//!
//! ## Algorithm
//!
//! Elements are generated from the seed and appended to a single sequence
//! until a value reappears. The cycle length is the distance from that
//! value's first occurrence to its reappearance. By pigeonhole the loop ends
//! after at most `|m| + 1` generated elements.
//!
//! ## Example
//!
//! ```
//! use lcg_cycle::analyzer::CycleAnalyzer;
//! use lcg_cycle::core::Parameters;
//!
//! # fn main() -> Result<(), lcg_cycle::error::LcgError> {
//! let mut analyzer = CycleAnalyzer::new();
//! analyzer.set_parameters(Parameters::new(2, 0, 8, 1));
//!
//! // 1, 2, 4, 0, 0
//! let measurement = analyzer.measure()?;
//! assert_eq!(measurement.prefix_length, 3);
//! assert_eq!(measurement.cycle_length, 1);
//! assert_eq!(analyzer.sequence(), &[1, 2, 4, 0, 0]);
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;

pub use analyzer_impl::*;
