//! Sensor-reading fixture
//!
//! A deliberately small pipeline the integration tests and benchmarks share:
//! parse a raw reading, then grade it against a soft and a hard limit.

use triage_core::{ContractResult, Maybe, Outcome};

/// Readings at or above this are graded as warnings.
pub const WARN_LIMIT: i64 = 100;
/// Readings at or above this are graded as failures.
pub const FAIL_LIMIT: i64 = 1000;

/// Error carried by readings that leave the permitted range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutOfRange {
    pub observed: i64,
    pub limit: i64,
}

/// Parses a raw reading, absent when the text is not an integer.
pub fn parse_reading(text: &str) -> Maybe<i64> {
    Maybe::from(text.trim().parse().ok())
}

/// Grades a reading against the limits.
pub fn check_reading(value: i64) -> ContractResult<Outcome<i64, OutOfRange>> {
    if value >= FAIL_LIMIT {
        Outcome::fail_with(
            format!("reading {} exceeds the hard limit", value),
            OutOfRange {
                observed: value,
                limit: FAIL_LIMIT,
            },
        )
    } else if value >= WARN_LIMIT {
        Outcome::warn(value, format!("reading {} is above the soft limit", value))
    } else {
        Ok(Outcome::ok(value))
    }
}
