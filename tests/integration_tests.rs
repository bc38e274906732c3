use course_stats::analyzers::aggregate::{
    average_scores_per_task, average_total_score, easiest_task, total_scores,
};
use course_stats::analyzers::analyzer::build_report;
use course_stats::analyzers::grade::{Mark, define_marks};
use course_stats::model::Person;
use course_stats::parser::parse_results;
use course_stats::table::{ResultsTable, collect};

const FIXTURE: &str = include_str!("fixtures/course_results.csv");

#[test]
fn test_full_pipeline() {
    let results = parse_results(FIXTURE.as_bytes()).expect("Failed to parse fixture");
    assert_eq!(results.len(), 3);

    let totals = total_scores(results.clone()).unwrap();
    assert_eq!(totals[&Person::new("Jim", "Gates")], 287.0 / 3.0);
    // Kim skipped lab 2 and is still divided by three tasks
    assert_eq!(totals[&Person::new("Kim", "Ryan")], 37.0);

    // 630 points over 3 students * 3 tasks
    assert_eq!(average_total_score(results.clone()).unwrap(), 70.0);

    let per_task = average_scores_per_task(results.clone()).unwrap();
    assert_eq!(per_task["Lab 1. Figures"], 226.0 / 3.0);
    assert_eq!(per_task["Lab 2. War and Seas"], 175.0 / 3.0);

    let marks = define_marks(results.clone()).unwrap();
    assert_eq!(marks[&Person::new("Jim", "Gates")], Mark::A);
    assert_eq!(marks[&Person::new("Betty", "Eco")], Mark::C);
    assert_eq!(marks[&Person::new("Kim", "Ryan")], Mark::F);

    assert_eq!(easiest_task(results), "Lab 3. File Tree");
}

#[test]
fn test_report_matches_individual_aggregates() {
    let results = parse_results(FIXTURE.as_bytes()).unwrap();
    let report = build_report(results.clone()).unwrap();

    assert_eq!(report.student_count, 3);
    assert_eq!(report.task_count, 3);
    assert_eq!(report.overall.average, average_total_score(results.clone()).unwrap());
    assert_eq!(report.overall.mark, Mark::D);
    assert_eq!(report.easiest_task, easiest_task(results));
}

#[test]
fn test_table_from_fixture() {
    let results = parse_results(FIXTURE.as_bytes()).unwrap();
    let table = collect(ResultsTable::default(), &results);
    let lines = table.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Student"));
    assert!(lines[0].contains("Lab 2. War and Seas"));
    assert!(lines[3].starts_with("Kim Ryan"));
    assert!(lines[3].contains(" - |"));
}
