use sortviz::Algorithm;

use crate::{InputError, InputResult};

/// Parses a comma-separated list of numbers, e.g. `"5, 3, 8, 1"`.
///
/// Whitespace around items is ignored and a blank string is the empty sequence. Empty items
/// (`"1,,2"`), non-numeric items and non-finite values (`NaN`, `inf`) are rejected with the
/// zero-based position of the offending item.
pub fn parse_sequence(input: &str) -> InputResult<Vec<f64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .enumerate()
        .map(|(position, raw)| {
            let token = raw.trim();
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| InputError::invalid_number(token, position))
        })
        .collect()
}

/// Parses an algorithm selector value (`bubble`, `quick`, `selection`, `insertion`).
pub fn parse_algorithm(name: &str) -> InputResult<Algorithm> {
    Algorithm::from_name(name)
        .ok_or_else(|| InputError::UnknownAlgorithm(name.trim().to_string()))
}
