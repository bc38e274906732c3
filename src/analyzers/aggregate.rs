use crate::analyzers::utility::{ratio, student_count, task_count};
use crate::error::{AggregateError, Result};
use crate::model::{CourseResult, Person};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Returned by [`easiest_task`] when no task has been scored.
pub const NO_RESULTS: &str = "No any results";

/// Average score of every student.
///
/// A student's points are divided by the number of distinct tasks in the whole
/// course, so tasks a student skipped lower their average.
///
/// # Errors
///
/// Fails when there are no tasks or a student appears twice.
pub fn total_scores(
    results: impl IntoIterator<Item = CourseResult>,
) -> Result<HashMap<Person, f64>> {
    let results = results.into_iter().collect::<Vec<_>>();
    student_averages(&results)
}

pub(crate) fn student_averages(results: &[CourseResult]) -> Result<HashMap<Person, f64>> {
    let tasks = task_count(results);

    let mut averages = HashMap::with_capacity(results.len());
    for result in results {
        let average = ratio(result.total_points() as f64, tasks, "task count")?;
        if averages.insert(result.person().clone(), average).is_some() {
            return Err(AggregateError::DuplicateStudent(result.person().clone()));
        }
    }

    debug!(students = averages.len(), tasks, "Computed total scores");
    Ok(averages)
}

/// Average over every (student, task) slot of the course.
///
/// Missing scores count as zero: the denominator is always
/// `student_count * task_count`.
pub fn average_total_score(results: impl IntoIterator<Item = CourseResult>) -> Result<f64> {
    let results = results.into_iter().collect::<Vec<_>>();
    overall_average(&results)
}

pub(crate) fn overall_average(results: &[CourseResult]) -> Result<f64> {
    let slots = student_count(results) * task_count(results);
    let points: u64 = results.iter().map(CourseResult::total_points).sum();
    ratio(points as f64, slots, "student count * task count")
}

/// Average score of every task over all students of the course, including
/// the students that did not submit it.
pub fn average_scores_per_task(
    results: impl IntoIterator<Item = CourseResult>,
) -> Result<HashMap<String, f64>> {
    let results = results.into_iter().collect::<Vec<_>>();
    task_averages(&results)
}

pub(crate) fn task_averages(results: &[CourseResult]) -> Result<HashMap<String, f64>> {
    let students = student_count(results);
    if students == 0 {
        return Err(AggregateError::DivisionByZero {
            divisor: "student count",
        });
    }

    Ok(task_sums(results)
        .into_iter()
        .map(|(task, points)| (task.to_string(), points as f64 / students as f64))
        .collect())
}

/// Task with the highest summed score.
///
/// Ties go to the alphabetically first task. Returns [`NO_RESULTS`] when no
/// task has been scored.
pub fn easiest_task(results: impl IntoIterator<Item = CourseResult>) -> String {
    let results = results.into_iter().collect::<Vec<_>>();
    top_task(&results)
}

pub(crate) fn top_task(results: &[CourseResult]) -> String {
    let mut best: Option<(&str, u64)> = None;
    for (task, points) in task_sums(results) {
        if best.is_none_or(|(_, max)| points > max) {
            best = Some((task, points));
        }
    }

    best.map_or_else(|| NO_RESULTS.to_string(), |(task, _)| task.to_string())
}

fn task_sums(results: &[CourseResult]) -> BTreeMap<&str, u64> {
    let mut sums = BTreeMap::new();
    for (task, &score) in results.iter().flat_map(|r| r.task_results()) {
        *sums.entry(task.as_str()).or_insert(0) += u64::from(score);
    }
    sums
}
