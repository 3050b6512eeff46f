use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::core::{CycleMeasurement, OverflowMode, Parameters};
use crate::error::LcgError;

/// Generates an LCG sequence and measures its cycle
///
/// The analyzer is either unconfigured (no parameters yet) or configured.
/// [`CycleAnalyzer::set_parameters`] moves it to the configured state from
/// either state and always discards the previously generated sequence.
pub struct CycleAnalyzer {
    parameters: Option<Parameters>,
    sequence: Vec<i64>,
    overflow: OverflowMode,
    step_limit: Option<usize>,
}

impl Default for CycleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleAnalyzer {
    /// Create an unconfigured analyzer with exact arithmetic and no step limit
    pub fn new() -> Self {
        Self {
            parameters: None,
            sequence: Vec::new(),
            overflow: OverflowMode::default(),
            step_limit: None,
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = overflow;
        self
    }

    /// Cap the number of stored sequence elements
    ///
    /// Without a limit, a modulus `m` costs up to `|m| + 1` elements of work
    /// and memory.
    pub fn with_step_limit(mut self, step_limit: Option<usize>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Replace the recurrence parameters and clear the sequence
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters = Some(parameters);
        self.sequence.clear();
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.parameters.is_some()
    }

    pub fn overflow(&self) -> OverflowMode {
        self.overflow
    }

    /// The sequence generated by the last measurement, in generation order
    pub fn sequence(&self) -> &[i64] {
        &self.sequence
    }

    /// Replace the stored sequence, keeping the parameters
    pub fn set_sequence(&mut self, sequence: Vec<i64>) {
        self.sequence = sequence;
    }

    /// Compute `(a * current + c) mod m` without touching the sequence
    pub fn generate_next_element(&self, current: i64) -> Result<i64, LcgError> {
        let parameters = self.configured()?;
        next_element(parameters, current, self.overflow)
    }

    /// Length of the repeating cycle, excluding any non-repeating prefix
    ///
    /// Returns 0 for the zero modulus, otherwise a value in `[1, |m|]`.
    pub fn calculate_cycle_length(&mut self) -> Result<usize, LcgError> {
        Ok(self.measure()?.cycle_length)
    }

    /// Generate from the seed until a value repeats, then measure the cycle
    pub fn measure(&mut self) -> Result<CycleMeasurement, LcgError> {
        let parameters = self.configured()?;
        self.sequence.clear();

        if parameters.m == 0 {
            debug!(%parameters, "zero modulus, nothing to generate");
            return Ok(CycleMeasurement::degenerate());
        }

        let mut first_seen = HashMap::new();
        let mut current = parameters.k;
        self.push(current)?;
        first_seen.insert(current, 0);

        let meeting_position = loop {
            current = next_element(parameters, current, self.overflow)?;
            let position = self.sequence.len();
            self.push(current)?;

            match first_seen.entry(current) {
                Entry::Occupied(_) => break position,
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        };

        let cycle_length =
            self.specify_distance_between_repeating_values(meeting_position, current);
        let measurement = CycleMeasurement {
            prefix_length: meeting_position - cycle_length,
            cycle_length,
            meeting_position,
            repeating_value: Some(current),
        };

        debug!(
            %parameters,
            prefix = measurement.prefix_length,
            cycle = measurement.cycle_length,
            "measured sequence"
        );

        Ok(measurement)
    }

    /// Distance from the first occurrence of `repeating_value` to
    /// `meeting_position` in the stored sequence
    pub fn specify_distance_between_repeating_values(
        &self,
        meeting_position: usize,
        repeating_value: i64,
    ) -> usize {
        distance_to_first_occurrence(&self.sequence, meeting_position, repeating_value)
    }

    fn configured(&self) -> Result<Parameters, LcgError> {
        self.parameters.ok_or(LcgError::Unconfigured)
    }

    fn push(&mut self, value: i64) -> Result<(), LcgError> {
        if let Some(limit) = self.step_limit
            && self.sequence.len() >= limit
        {
            return Err(LcgError::StepLimitExceeded { limit });
        }

        trace!(position = self.sequence.len(), value, "generated element");
        self.sequence.push(value);
        Ok(())
    }
}

/// One step of the recurrence under the given overflow mode
///
/// The reduction is Euclidean, so the result lies in `[0, |m|)` even for
/// negative operands.
pub fn next_element(
    parameters: Parameters,
    current: i64,
    overflow: OverflowMode,
) -> Result<i64, LcgError> {
    let Parameters { a, c, m, .. } = parameters;
    if m == 0 {
        return Err(LcgError::ZeroModulus);
    }

    let overflowed = || LcgError::ArithmeticOverflow { a, x: current, c };

    match overflow {
        OverflowMode::Exact => {
            let value = (i128::from(a) * i128::from(current) + i128::from(c))
                .rem_euclid(i128::from(m));
            i64::try_from(value).map_err(|_| overflowed())
        }
        OverflowMode::Wrapping => Ok(a
            .wrapping_mul(current)
            .wrapping_add(c)
            .wrapping_rem_euclid(m)),
        // i64::MIN rem -1 is the only failing remainder and its value is 0
        OverflowMode::Checked => a
            .checked_mul(current)
            .and_then(|product| product.checked_add(c))
            .map(|sum| sum.wrapping_rem_euclid(m))
            .ok_or_else(overflowed),
    }
}

/// Scan `sequence` from the start, up to and including `meeting_position`,
/// for the first element equal to `value` and return its distance to
/// `meeting_position`. Returns 0 when the value does not occur.
pub fn distance_to_first_occurrence(
    sequence: &[i64],
    meeting_position: usize,
    value: i64,
) -> usize {
    sequence
        .iter()
        .take(meeting_position.saturating_add(1))
        .position(|&element| element == value)
        .map_or(0, |first| meeting_position - first)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn analyzer_for(a: i64, c: i64, m: i64, k: i64) -> CycleAnalyzer {
        let mut analyzer = CycleAnalyzer::new();
        analyzer.set_parameters(Parameters::new(a, c, m, k));
        analyzer
    }

    /// Ascending run from `min` to `max`, wrapping back to `min`
    fn wrapping_run(len: usize, min: i64, max: i64) -> Vec<i64> {
        let mut values = Vec::with_capacity(len);
        let mut next = min;
        for _ in 0..len {
            if next > max {
                next = min;
            }
            values.push(next);
            next += 1;
        }
        values
    }

    #[test]
    fn test_set_parameters_stores_values() {
        let analyzer = analyzer_for(242, 234, 6456, 123);

        assert!(analyzer.is_configured());
        assert_eq!(
            analyzer.parameters(),
            Some(&Parameters::new(242, 234, 6456, 123))
        );
        assert!(analyzer.sequence().is_empty());
    }

    #[test]
    fn test_set_parameters_resets_sequence() {
        let mut analyzer = analyzer_for(5, 3, 16, 7);
        analyzer.calculate_cycle_length().unwrap();
        assert!(!analyzer.sequence().is_empty());

        analyzer.set_parameters(Parameters::new(345, 86780, 786, 68787));
        assert_eq!(analyzer.sequence().len(), 0);
    }

    #[test]
    fn test_generate_next_element() {
        let analyzer = analyzer_for(124, 321, 88657, 78);
        assert_eq!(analyzer.generate_next_element(1424).unwrap(), 88240);

        let analyzer = analyzer_for(2342, 543543, 456, 4);
        assert_eq!(analyzer.generate_next_element(645645).unwrap(), 21);

        // Generating does not record anything
        assert!(analyzer.sequence().is_empty());
    }

    #[test]
    fn test_generate_next_element_stays_in_range() {
        let cases = [
            (3, 7, 10),
            (-5, 2, 9),
            (7, -100, 13),
            (i64::MAX, i64::MAX, 1_000_003),
            (1, 0, 2),
        ];

        for (a, c, m) in cases {
            let analyzer = analyzer_for(a, c, m, 0);
            for current in [-1_000_000, -7, -1, 0, 1, 5, 999, i64::MAX, i64::MIN] {
                let next = analyzer.generate_next_element(current).unwrap();
                assert!(
                    (0..m).contains(&next),
                    "{next} out of range for a={a} c={c} m={m} x={current}"
                );
            }
        }
    }

    #[test]
    fn test_unconfigured_analyzer_errors() {
        let mut analyzer = CycleAnalyzer::new();

        assert!(!analyzer.is_configured());
        assert!(matches!(
            analyzer.generate_next_element(1),
            Err(LcgError::Unconfigured)
        ));
        assert!(matches!(
            analyzer.calculate_cycle_length(),
            Err(LcgError::Unconfigured)
        ));
    }

    #[test]
    fn test_zero_modulus() {
        let mut analyzer = analyzer_for(0, 0, 0, 0);

        assert!(matches!(
            analyzer.generate_next_element(3),
            Err(LcgError::ZeroModulus)
        ));
        assert_eq!(analyzer.calculate_cycle_length().unwrap(), 0);
        assert!(analyzer.sequence().is_empty());
    }

    #[test]
    fn test_full_period_generator() {
        let mut analyzer = analyzer_for(1, 1, 4, 2);
        let measurement = analyzer.measure().unwrap();

        assert_eq!(analyzer.sequence(), &[2, 3, 0, 1, 2]);
        assert_eq!(measurement.prefix_length, 0);
        assert_eq!(measurement.cycle_length, 4);
        assert_eq!(measurement.meeting_position, 4);
        assert_eq!(measurement.repeating_value, Some(2));
    }

    #[test]
    fn test_known_cycle_lengths() {
        let cases = [
            (2643, 173052, 2029, 9, 2028),
            (5, 3, 16, 7, 16),
            (179870, 19879129, 392300, 12, 3922),
            (1, 1, 1, 5, 1),
        ];

        for (a, c, m, k, expected) in cases {
            let mut analyzer = analyzer_for(a, c, m, k);
            assert_eq!(
                analyzer.calculate_cycle_length().unwrap(),
                expected,
                "a={a} c={c} m={m} k={k}"
            );
        }
    }

    #[test]
    fn test_prefix_is_excluded_from_cycle() {
        // 1, 2, 4, 0, 0
        let mut analyzer = analyzer_for(2, 0, 8, 1);
        let measurement = analyzer.measure().unwrap();
        assert_eq!(measurement.prefix_length, 3);
        assert_eq!(measurement.cycle_length, 1);

        // 7, 3, 3
        let mut analyzer = analyzer_for(0, 3, 10, 7);
        let measurement = analyzer.measure().unwrap();
        assert_eq!(measurement.prefix_length, 1);
        assert_eq!(measurement.cycle_length, 1);

        // Seed outside [0, m) is always prefix
        let mut analyzer = analyzer_for(1, 1, 4, -3);
        let measurement = analyzer.measure().unwrap();
        assert_eq!(analyzer.sequence(), &[-3, 2, 3, 0, 1, 2]);
        assert_eq!(measurement.prefix_length, 1);
        assert_eq!(measurement.cycle_length, 4);
    }

    #[test]
    fn test_negative_modulus_uses_absolute_range() {
        let mut analyzer = analyzer_for(1, 1, -4, 2);
        assert_eq!(analyzer.calculate_cycle_length().unwrap(), 4);
        assert!(analyzer.sequence().iter().skip(1).all(|v| (0..4).contains(v)));
    }

    #[test]
    fn test_cycle_length_bounded_by_modulus() {
        for m in 1..=12 {
            for a in 0..m {
                for c in 0..m {
                    let mut analyzer = analyzer_for(a, c, m, a + c);
                    let length = analyzer.calculate_cycle_length().unwrap();
                    assert!((1..=m as usize).contains(&length));
                }
            }
        }
    }

    #[test]
    fn test_measurement_is_deterministic() {
        let parameters = Parameters::new(211508, 3857765, 995028, 16);
        let mut analyzer = CycleAnalyzer::new();

        analyzer.set_parameters(parameters);
        let first = analyzer.measure().unwrap();
        let first_sequence = analyzer.sequence().to_vec();

        analyzer.set_parameters(parameters);
        let second = analyzer.measure().unwrap();

        assert_eq!(first, second);
        assert_eq!(first_sequence, analyzer.sequence());
    }

    #[test]
    fn test_step_limit() {
        let mut analyzer = CycleAnalyzer::new().with_step_limit(Some(100));
        analyzer.set_parameters(Parameters::new(2643, 173052, 2029, 9));

        assert!(matches!(
            analyzer.calculate_cycle_length(),
            Err(LcgError::StepLimitExceeded { limit: 100 })
        ));

        // Enough room for 2028 cycle elements plus the repeat
        let mut analyzer = CycleAnalyzer::new().with_step_limit(Some(2029));
        analyzer.set_parameters(Parameters::new(2643, 173052, 2029, 9));
        assert_eq!(analyzer.calculate_cycle_length().unwrap(), 2028);
    }

    #[test]
    fn test_overflow_modes() {
        let parameters = Parameters::new(i64::MAX, 0, 10, 2);

        assert_eq!(next_element(parameters, 2, OverflowMode::Exact).unwrap(), 4);
        assert_eq!(
            next_element(parameters, 2, OverflowMode::Wrapping).unwrap(),
            8
        );
        assert!(matches!(
            next_element(parameters, 2, OverflowMode::Checked),
            Err(LcgError::ArithmeticOverflow { x: 2, .. })
        ));

        let analyzer = CycleAnalyzer::new().with_overflow(OverflowMode::Checked);
        assert_eq!(analyzer.overflow(), OverflowMode::Checked);
    }

    #[test]
    fn test_checked_mode_min_remainder() {
        let parameters = Parameters::new(1, 0, -1, 0);
        assert_eq!(
            next_element(parameters, i64::MIN, OverflowMode::Checked).unwrap(),
            0
        );
    }

    #[test]
    fn test_specify_distance_between_repeating_values() {
        let fixtures = [
            wrapping_run(100, 1, 50),
            wrapping_run(200, 1, 1000),
            wrapping_run(300, 100, 200),
            wrapping_run(50, 1, 1),
            wrapping_run(0, 0, 0),
        ];

        for fixture in fixtures {
            let mut expected = 0;
            let mut meeting_position = 0;
            let mut repeating_value = 0;
            for index in 1..fixture.len() {
                if fixture[index] < fixture[index - 1] {
                    expected = (fixture[index - 1] - fixture[index] + 1) as usize;
                    meeting_position = index;
                    repeating_value = fixture[index];
                    break;
                }
            }

            let mut analyzer = CycleAnalyzer::new();
            analyzer.set_sequence(fixture);
            assert_eq!(
                analyzer
                    .specify_distance_between_repeating_values(meeting_position, repeating_value),
                expected
            );
        }
    }

    #[test]
    fn test_distance_for_ascending_run_of_fifty() {
        let sequence = wrapping_run(100, 1, 50);
        assert_eq!(distance_to_first_occurrence(&sequence, 50, 1), 50);
    }

    #[test]
    fn test_distance_ignores_positions_after_meeting() {
        let sequence = [4, 5, 6, 7, 6];
        assert_eq!(distance_to_first_occurrence(&sequence, 2, 6), 0);
        assert_eq!(distance_to_first_occurrence(&sequence, 4, 6), 2);
        assert_eq!(distance_to_first_occurrence(&sequence, 1, 7), 0);
    }
}
