//! Data types produced by the report pipeline.

use crate::analyzers::grade::Mark;
use crate::model::Person;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Average and mark of a single student.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub student: Person,
    pub average: f64,
    pub mark: Mark,
}

/// Average score of a single task over every student of the course.
#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    pub task: String,
    pub average: f64,
}

/// Average over all (student, task) slots and its mark.
#[derive(Debug, Clone, Serialize)]
pub struct OverallSummary {
    pub average: f64,
    pub mark: Mark,
}

/// Complete statistics of one course, written out as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct CourseReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub student_count: usize,
    pub task_count: usize,
    pub easiest_task: String,
    pub overall: OverallSummary,
    pub students: Vec<StudentSummary>,
    pub tasks: Vec<TaskSummary>,
}

/// One row of the marks CSV.
#[derive(Debug, Serialize)]
pub struct MarkRecord<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub average: f64,
    pub mark: Mark,
}

impl<'a> From<&'a StudentSummary> for MarkRecord<'a> {
    fn from(summary: &'a StudentSummary) -> Self {
        MarkRecord {
            first_name: &summary.student.first_name,
            last_name: &summary.student.last_name,
            average: summary.average,
            mark: summary.mark,
        }
    }
}
