//! CSV loader for course results.
//!
//! Input is long-form: one row per (student, task) score with the header
//! `first_name,last_name,task,score`.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::Read;
use tracing::debug;

use crate::model::{CourseResult, Person, TaskResults};

#[derive(Debug, Deserialize)]
struct ScoreRow {
    first_name: String,
    last_name: String,
    task: String,
    score: u32,
}

/// Reads score rows and groups them into one [`CourseResult`] per student,
/// in order of first appearance.
///
/// # Errors
///
/// Returns an error for malformed rows or when a student has two scores for
/// the same task.
pub fn parse_results<R: Read>(reader: R) -> Result<Vec<CourseResult>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut order: Vec<Person> = Vec::new();
    let mut scores: HashMap<Person, TaskResults> = HashMap::new();

    for (index, row) in rdr.deserialize().enumerate() {
        let line = index + 2;
        let row: ScoreRow = row.with_context(|| format!("invalid score row at line {line}"))?;
        let person = Person::new(row.first_name, row.last_name);
        let name = person.to_string();

        let tasks = match scores.entry(person) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                order.push(e.key().clone());
                e.insert(TaskResults::new())
            }
        };
        if tasks.insert(row.task.clone(), row.score).is_some() {
            bail!("duplicate score for task '{}' of {name} at line {line}", row.task);
        }
    }

    let results = order
        .into_iter()
        .map(|person| {
            let tasks = scores.remove(&person).unwrap_or_default();
            CourseResult::new(person, tasks)
        })
        .collect::<Vec<_>>();

    debug!(students = results.len(), "Parsed course results");
    Ok(results)
}

/// Opens `path` and parses its course results.
pub fn load_results(path: &str) -> Result<Vec<CourseResult>> {
    let file = File::open(path).with_context(|| format!("cannot open results file '{path}'"))?;
    parse_results(file).with_context(|| format!("cannot parse results file '{path}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_groups_rows_by_student() {
        let data = "\
first_name,last_name,task,score
Ann,Doe,lab1,80
Bob,Roe,lab1,70
Ann,Doe,lab2,90
";
        let results = parse_results(data.as_bytes()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].person(), &Person::new("Ann", "Doe"));
        assert_eq!(results[0].task_results().len(), 2);
        assert_eq!(results[0].task_results()["lab2"], 90);
        assert_eq!(results[1].person(), &Person::new("Bob", "Roe"));
        assert_eq!(results[1].total_points(), 70);
    }

    #[test]
    fn test_parse_trims_fields() {
        let data = "first_name,last_name,task,score\n Ann , Doe , lab1 , 80 \n";
        let results = parse_results(data.as_bytes()).unwrap();
        assert_eq!(results[0].task_results()["lab1"], 80);
    }

    #[test]
    fn test_parse_header_only() {
        let results = parse_results("first_name,last_name,task,score\n".as_bytes()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_rejects_duplicate_task() {
        let data = "first_name,last_name,task,score\nAnn,Doe,lab1,80\nAnn,Doe,lab1,90\n";
        let err = parse_results(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("duplicate score for task 'lab1'"));
    }

    #[test]
    fn test_parse_rejects_negative_score() {
        let data = "first_name,last_name,task,score\nAnn,Doe,lab1,-5\n";
        assert!(parse_results(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_results("/nonexistent/course_stats_results.csv").is_err());
    }
}
