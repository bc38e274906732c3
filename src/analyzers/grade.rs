use crate::analyzers::aggregate::student_averages;
use crate::error::Result;
use crate::model::{CourseResult, Person};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Letter mark of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Mark {
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::A => "A",
            Mark::B => "B",
            Mark::C => "C",
            Mark::D => "D",
            Mark::E => "E",
            Mark::F => "F",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts an average score into a letter mark.
///
/// | Range         | Mark |
/// |---------------|------|
/// | > 90          | A    |
/// | 83 ..= 90     | B    |
/// | 75 .. 83      | C    |
/// | 68 .. 75      | D    |
/// | 60 .. 68      | E    |
/// | < 60          | F    |
///
/// NaN falls through to `F`.
pub fn define_mark(score: f64) -> Mark {
    match score {
        s if s > 90.0 => Mark::A,
        s if s >= 83.0 => Mark::B,
        s if s >= 75.0 => Mark::C,
        s if s >= 68.0 => Mark::D,
        s if s >= 60.0 => Mark::E,
        _ => Mark::F,
    }
}

/// Marks every student by their average over all tasks of the course.
///
/// # Errors
///
/// Fails when the results contain no tasks or the same student twice.
pub fn define_marks(
    results: impl IntoIterator<Item = CourseResult>,
) -> Result<HashMap<Person, Mark>> {
    let results = results.into_iter().collect::<Vec<_>>();
    let marks = student_averages(&results)?
        .into_iter()
        .map(|(person, average)| (person, define_mark(average)))
        .collect::<HashMap<_, _>>();

    debug!(students = marks.len(), "Defined marks");
    Ok(marks)
}
