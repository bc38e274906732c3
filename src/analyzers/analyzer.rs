use crate::analyzers::aggregate::{overall_average, student_averages, task_averages, top_task};
use crate::analyzers::grade::define_mark;
use crate::analyzers::types::{CourseReport, OverallSummary, StudentSummary, TaskSummary};
use crate::analyzers::utility::{student_count, task_count, task_ids};
use crate::error::Result;
use crate::model::CourseResult;
use crate::output::{print_json, write_json};
use crate::parser::load_results;
use chrono::Utc;
use tracing::info;

/// Computes every course statistic from one snapshot of the results.
///
/// Students keep their input order, tasks their order of first appearance.
pub fn build_report(results: impl IntoIterator<Item = CourseResult>) -> Result<CourseReport> {
    let results = results.into_iter().collect::<Vec<_>>();

    let averages = student_averages(&results)?;
    let task_avgs = task_averages(&results)?;
    let overall = overall_average(&results)?;

    let students = results
        .iter()
        .map(|r| {
            let average = averages[r.person()];
            StudentSummary {
                student: r.person().clone(),
                average,
                mark: define_mark(average),
            }
        })
        .collect();

    let tasks = task_ids(&results)
        .into_iter()
        .map(|task| TaskSummary {
            task: task.to_string(),
            average: task_avgs[task],
        })
        .collect();

    Ok(CourseReport {
        schema_version: 1,
        generated_at: Utc::now(),
        student_count: student_count(&results),
        task_count: task_count(&results),
        easiest_task: top_task(&results),
        overall: OverallSummary {
            average: overall,
            mark: define_mark(overall),
        },
        students,
        tasks,
    })
}

/// Loads a results CSV, builds its report and writes it as JSON to `output`.
pub fn analyze(input: &str, output: &str) -> anyhow::Result<CourseReport> {
    let results = load_results(input)?;
    info!(input, results = results.len(), "Loaded course results");

    let report = build_report(results)?;
    write_json(output, &report)?;
    print_json(&report.overall)?;

    info!(
        output,
        students = report.student_count,
        tasks = report.task_count,
        average = report.overall.average,
        mark = %report.overall.mark,
        easiest_task = %report.easiest_task,
        "Course report written"
    );
    Ok(report)
}
