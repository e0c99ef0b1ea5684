use std::fmt;

use crate::store::StoreError;

use super::validation::{MAX_AUTHOR_LEN, MAX_BODY_LEN};

/// User-correctable input problems. Reported synchronously to the submitter,
/// never logged as a system fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author or body (or both) was empty after trimming.
    MissingField,
    /// Trimmed author exceeded the character limit.
    AuthorTooLong { length: usize },
    /// Trimmed body exceeded the character limit.
    BodyTooLong { length: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField => {
                write!(f, "both name and message are required")
            }
            ValidationError::AuthorTooLong { length } => write!(
                f,
                "name is limited to {} characters (got {})",
                MAX_AUTHOR_LEN, length
            ),
            ValidationError::BodyTooLong { length } => write!(
                f,
                "message is limited to {} characters (got {})",
                MAX_BODY_LEN, length
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error from a submission attempt: rejected input, or a durable write that
/// did not complete (in which case nothing was mutated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Validation(ValidationError),
    Store(StoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(err) => write!(f, "{}", err),
            SubmitError::Store(err) => write!(f, "could not save message: {}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Validation(err)
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        SubmitError::Store(err)
    }
}
