//! Output formatting and persistence for course reports.
//!
//! Supports JSON files, JSON logging and CSV append of student marks.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::{MarkRecord, StudentSummary};
use csv::WriterBuilder;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Writes a value as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_json(path: &str, value: &impl Serialize) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create '{path}'"))?;
    serde_json::to_writer_pretty(file, value)?;
    debug!(path, "JSON written");
    Ok(())
}

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Appends one CSV row per student to `path`.
///
/// Creates the file with headers if it does not already exist.
pub fn append_marks(path: &str, students: &[StudentSummary]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = students.len(), "Appending marks");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // header only once per file
        .from_writer(file);

    for student in students {
        writer.serialize(MarkRecord::from(student))?;
    }
    writer.flush()?;

    Ok(())
}
