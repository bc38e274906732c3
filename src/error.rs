use crate::model::Person;
use thiserror::Error;

/// Failures of the aggregation functions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AggregateError {
    #[error("division by zero: {divisor} is zero")]
    DivisionByZero { divisor: &'static str },
    #[error("duplicate results for student {0}")]
    DuplicateStudent(Person),
}

pub type Result<T> = std::result::Result<T, AggregateError>;
