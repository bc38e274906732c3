//! Course result aggregation and marking.
//!
//! This module derives per-student and per-task averages from a set of
//! course results, assigns letter marks, finds the easiest task and
//! assembles everything into a serializable report.

pub mod aggregate;
pub mod analyzer;
pub mod grade;
pub mod types;
pub mod utility;
