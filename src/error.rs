//! Validation failures reported through `NormalizeResult::Failure`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("Path must be a string")]
    NotAString,
    #[error("Path cannot be empty")]
    EmptyPath,
}
