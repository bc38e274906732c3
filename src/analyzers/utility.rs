use crate::error::{AggregateError, Result};
use crate::model::CourseResult;
use std::collections::HashSet;

/// Number of distinct task identifiers across all results.
pub fn task_count(results: &[CourseResult]) -> usize {
    results
        .iter()
        .flat_map(|r| r.task_results().keys())
        .collect::<HashSet<_>>()
        .len()
}

/// Number of distinct students across all results.
pub fn student_count(results: &[CourseResult]) -> usize {
    results
        .iter()
        .map(CourseResult::person)
        .collect::<HashSet<_>>()
        .len()
}

/// Distinct task identifiers in order of first appearance.
///
/// Tasks of a single result have no inherent order, so they are taken
/// alphabetically within each result.
pub fn task_ids(results: &[CourseResult]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for result in results {
        let mut keys = result
            .task_results()
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        keys.sort_unstable();
        ids.extend(keys.into_iter().filter(|k| seen.insert(*k)));
    }
    ids
}

/// Divides `numerator` by `denominator`, failing when the denominator is zero.
/// `divisor` names the denominator in the error.
pub fn ratio(numerator: f64, denominator: usize, divisor: &'static str) -> Result<f64> {
    if denominator == 0 {
        return Err(AggregateError::DivisionByZero { divisor });
    }
    Ok(numerator / denominator as f64)
}
