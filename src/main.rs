//! CLI entry point for the course statistics tool.
//!
//! Provides subcommands for building a full course report, printing the
//! results table, exporting student marks and running integer reductions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use course_stats::analyzers::analyzer::{analyze, build_report};
use course_stats::config::ReportConfig;
use course_stats::output::append_marks;
use course_stats::parser::load_results;
use course_stats::stats::{odd_sum, product, sum, sum_by_remainder};
use course_stats::table::{ResultsTable, collect};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "course_stats")]
#[command(about = "Derive scores, marks and reports from course results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full course report and write it as JSON
    Report {
        /// CSV file with one `first_name,last_name,task,score` row per score
        #[arg(value_name = "INPUT")]
        input: String,

        /// JSON file to write the report to
        #[arg(short, long, default_value = "report.json")]
        output: String,
    },
    /// Print the results table
    Table {
        /// CSV file with course results
        #[arg(value_name = "INPUT")]
        input: String,

        /// Optional: JSON file with table rendering options
        #[arg(short, long)]
        config: Option<String>,

        /// Add total and mark columns plus an average row
        #[arg(long, default_value_t = false)]
        summary: bool,
    },
    /// Append every student's average and mark to a CSV file
    Marks {
        /// CSV file with course results
        #[arg(value_name = "INPUT")]
        input: String,

        /// CSV file to append marks to
        #[arg(short, long, default_value = "marks.csv")]
        output: String,
    },
    /// Reduce a list of integers
    Numbers {
        #[arg(value_enum)]
        operation: Operation,

        /// Divisor for `by-remainder`
        #[arg(short, long, default_value_t = 2)]
        modulus: i64,

        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    Sum,
    Product,
    OddSum,
    ByRemainder,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/course_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("course_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "info"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { input, output } => {
            analyze(&input, &output)?;
        }
        Commands::Table {
            input,
            config,
            summary,
        } => {
            print_table(&input, config.as_deref(), summary)?;
        }
        Commands::Marks { input, output } => {
            export_marks(&input, &output)?;
        }
        Commands::Numbers {
            operation,
            modulus,
            values,
        } => {
            reduce_numbers(operation, modulus, values)?;
        }
    }

    Ok(())
}

/// Filter from the environment variable `var`, or `default` when it is unset or invalid.
fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Renders the results table of `input` to stdout.
#[tracing::instrument]
fn print_table(input: &str, config: Option<&str>, summary: bool) -> Result<()> {
    let mut config = ReportConfig::load_or_default(config)?;
    config.summary |= summary;

    let results = load_results(input)?;
    let students = results.len();
    let table = collect(ResultsTable::new(&config), results);

    print!("{table}");
    info!(students, "Table printed");
    Ok(())
}

/// Appends the average and mark of every student in `input` to `output`.
#[tracing::instrument]
fn export_marks(input: &str, output: &str) -> Result<()> {
    let results = load_results(input)?;
    let report = build_report(results).context("cannot compute student marks")?;

    append_marks(output, &report.students)?;
    info!(rows = report.students.len(), output, "Marks appended");
    Ok(())
}

fn reduce_numbers(operation: Operation, modulus: i64, values: Vec<i64>) -> Result<()> {
    info!(count = values.len(), "Reducing values");
    match operation {
        Operation::Sum => println!("{}", sum(values)),
        Operation::Product => println!("{}", product(values)),
        Operation::OddSum => println!("{}", odd_sum(values)),
        Operation::ByRemainder => {
            for (remainder, total) in sum_by_remainder(modulus, values)? {
                println!("{remainder}: {total}");
            }
        }
    }
    Ok(())
}
