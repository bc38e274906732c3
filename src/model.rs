//! Course result records supplied by a loader.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Scores of one student, keyed by task identifier.
pub type TaskResults = HashMap<String, u32>;

/// A student. Only equality and hashing matter to the aggregation functions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// All task scores of one student for a course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseResult {
    person: Person,
    task_results: TaskResults,
}

impl CourseResult {
    pub fn new(person: Person, task_results: TaskResults) -> Self {
        Self {
            person,
            task_results,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn task_results(&self) -> &TaskResults {
        &self.task_results
    }

    /// Sum of every score this student received.
    pub fn total_points(&self) -> u64 {
        self.task_results.values().map(|&v| u64::from(v)).sum()
    }
}
