//! Built-in assertion table.
//!
//! The binary runs these after printing its result and reports a single
//! `[ASSERTION PASS]` or `[ASSERTION FAILED] <message>` line.

use std::fmt;

use thiserror::Error;

use crate::counter::count_palindromic_substrings;

/// Expected counts, checked in order.
pub const SELF_CHECK_CASES: &[(&str, usize)] = &[
    ("", 0),
    ("a", 1),
    ("aa", 3),
    ("abc", 3),
    ("aaa", 6),
    ("abbcbc", 9),
];

/// A case whose count did not match its expectation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("count_palindromic_substrings({input:?}) returned {actual}, expected {expected}")]
pub struct SelfCheckError {
    pub input: String,
    pub expected: usize,
    pub actual: usize,
}

/// Check `cases` with `count`, stopping at the first mismatch.
pub fn check_cases<F>(cases: &[(&str, usize)], count: F) -> Result<(), SelfCheckError>
where
    F: Fn(&str) -> usize,
{
    for &(input, expected) in cases {
        let actual = count(input);
        #[cfg(feature = "tracing")]
        tracing::debug!(input, expected, actual, "self-check case");
        if actual != expected {
            return Err(SelfCheckError {
                input: input.to_string(),
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Run [`SELF_CHECK_CASES`] against [`count_palindromic_substrings`].
pub fn run_self_check() -> Result<(), SelfCheckError> {
    check_cases(SELF_CHECK_CASES, count_palindromic_substrings)
}

/// Printable outcome of a self-check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfCheckOutcome {
    Pass,
    Failed(SelfCheckError),
}

impl SelfCheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, SelfCheckOutcome::Pass)
    }
}

impl From<Result<(), SelfCheckError>> for SelfCheckOutcome {
    fn from(result: Result<(), SelfCheckError>) -> Self {
        match result {
            Ok(()) => SelfCheckOutcome::Pass,
            Err(err) => SelfCheckOutcome::Failed(err),
        }
    }
}

impl fmt::Display for SelfCheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelfCheckOutcome::Pass => f.write_str("[ASSERTION PASS]"),
            SelfCheckOutcome::Failed(err) => write!(f, "[ASSERTION FAILED] {err}"),
        }
    }
}
