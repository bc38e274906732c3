//! Incremental text table of course results.
//!
//! [`ResultsTable`] is a [`Collector`]: it starts empty, takes one
//! [`CourseResult`] at a time and renders every row when finished.

use crate::analyzers::aggregate::{overall_average, task_averages};
use crate::analyzers::grade::define_mark;
use crate::analyzers::utility::{ratio, task_ids};
use crate::config::ReportConfig;
use crate::model::CourseResult;
use tracing::debug;

/// A sequential fold target.
///
/// A collector is seeded empty, fed items one at a time through
/// [`accumulate`](Collector::accumulate) and consumed by
/// [`finish`](Collector::finish). Two partially filled collectors cannot be
/// merged, so a collector must only ever be driven by a single sequential
/// fold and never split across threads.
pub trait Collector<T> {
    type Output;

    fn accumulate(&mut self, item: T);

    fn finish(self) -> Self::Output;
}

/// Folds `items` into `seed` in order and finishes it.
pub fn collect<C, I>(mut seed: C, items: I) -> C::Output
where
    C: Collector<I::Item>,
    I: IntoIterator,
{
    for item in items {
        seed.accumulate(item);
    }
    seed.finish()
}

const STUDENT_HEADER: &str = "Student";
const TOTAL_HEADER: &str = "Total";
const MARK_HEADER: &str = "Mark";
const AVERAGE_ROW: &str = "Average";

/// Results collected so far, rendered as one row per student and one column
/// per task.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    rows: Vec<CourseResult>,
    placeholder: String,
    summary: bool,
    precision: usize,
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

impl ResultsTable {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            rows: Vec::new(),
            placeholder: config.placeholder.clone(),
            summary: config.summary,
            precision: config.precision,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_course_result(&mut self, result: CourseResult) {
        self.rows.push(result);
    }

    /// Renders the header and every collected row.
    pub fn render(&self) -> String {
        let tasks = task_ids(&self.rows);

        let mut header = vec![STUDENT_HEADER.to_string()];
        header.extend(tasks.iter().map(ToString::to_string));
        if self.summary {
            header.push(TOTAL_HEADER.to_string());
            header.push(MARK_HEADER.to_string());
        }

        let mut lines = vec![header];
        for result in &self.rows {
            let mut cells = vec![result.person().to_string()];
            cells.extend(tasks.iter().map(|&task| {
                result
                    .task_results()
                    .get(task)
                    .map_or_else(|| self.placeholder.clone(), ToString::to_string)
            }));
            if self.summary {
                let total = ratio(result.total_points() as f64, tasks.len(), "task count").ok();
                cells.extend(self.total_and_mark(total));
            }
            lines.push(cells);
        }
        if self.summary && !self.rows.is_empty() {
            lines.push(self.average_row(&tasks));
        }

        debug!(rows = self.rows.len(), columns = tasks.len(), "Rendering results table");
        layout(&lines)
    }

    fn average_row(&self, tasks: &[&str]) -> Vec<String> {
        let averages = task_averages(&self.rows).unwrap_or_default();

        let mut cells = vec![AVERAGE_ROW.to_string()];
        cells.extend(tasks.iter().map(|&task| {
            averages
                .get(task)
                .map_or_else(|| self.placeholder.clone(), |&avg| self.decimal(avg))
        }));
        cells.extend(self.total_and_mark(overall_average(&self.rows).ok()));
        cells
    }

    fn total_and_mark(&self, total: Option<f64>) -> [String; 2] {
        match total {
            Some(total) => [self.decimal(total), define_mark(total).to_string()],
            None => [self.placeholder.clone(), self.placeholder.clone()],
        }
    }

    fn decimal(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }
}

impl Collector<CourseResult> for ResultsTable {
    type Output = String;

    fn accumulate(&mut self, item: CourseResult) {
        self.add_course_result(item);
    }

    fn finish(self) -> String {
        self.render()
    }
}

impl<'a> Collector<&'a CourseResult> for ResultsTable {
    type Output = String;

    fn accumulate(&mut self, item: &'a CourseResult) {
        self.add_course_result(item.clone());
    }

    fn finish(self) -> String {
        self.render()
    }
}

/// Pads every column to its widest cell. The first column is left-aligned,
/// the others right-aligned.
fn layout(lines: &[Vec<String>]) -> String {
    let columns = lines.first().map_or(0, Vec::len);
    let widths = (0..columns)
        .map(|col| {
            lines
                .iter()
                .map(|cells| cells[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    for cells in lines {
        for (col, (cell, &width)) in cells.iter().zip(&widths).enumerate() {
            if col == 0 {
                out.push_str(&format!("{cell:<width$}"));
            } else {
                out.push_str(&format!(" | {cell:>width$}"));
            }
        }
        out.push_str(" |\n");
    }
    out
}
