//! Error types for dayplan.

use thiserror::Error;

/// Errors produced outside the quick-add parser.
///
/// The parser itself is total and never returns one of these; they come from
/// configuration, day-string handling, draft validation and output.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration could not be located, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or stream failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A day string that is not `YYYY-MM-DD`.
    #[error("Invalid day '{0}': expected YYYY-MM-DD")]
    InvalidDay(String),

    /// A task draft that the task-creation workflow would reject.
    #[error("{0}")]
    Validation(String),

    /// Logger bootstrap failure.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl PlannerError {
    /// Exit code the binary uses for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::InvalidDay(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_day_message() {
        let err = PlannerError::InvalidDay("2024-13-01".to_string());
        assert_eq!(err.to_string(), "Invalid day '2024-13-01': expected YYYY-MM-DD");
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = PlannerError::Validation("Please add a title for the task".to_string());
        assert_eq!(err.to_string(), "Please add a title for the task");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(PlannerError::Validation(String::new()).exit_code(), 2);
        assert_eq!(PlannerError::Config(String::new()).exit_code(), 1);
    }
}
