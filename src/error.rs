//! Error types for the leave accounting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during lineage resolution and
//! leave accounting.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::RequestStatus;

/// The main error type for the leave accounting engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced employee does not exist in the directory.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: u64,
    },

    /// A date range has its start after its end.
    ///
    /// Raised for malformed stored records; the engine propagates this
    /// instead of silently producing a nonsensical day count.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The start of the malformed range.
        start: NaiveDate,
        /// The end of the malformed range.
        end: NaiveDate,
    },

    /// A time-off request was asked to make a disallowed status transition.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// The status the request currently has.
        from: RequestStatus,
        /// The status the transition attempted to reach.
        to: RequestStatus,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A directory lookup failed in the underlying store.
    ///
    /// Distinct from a dangling reference, which lookups report as an
    /// absent record rather than an error.
    #[error("Directory lookup failed: {message}")]
    LookupFailed {
        /// A description of the lookup failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound { id: 7 };
        assert_eq!(error.to_string(), "Employee not found: 7");
    }

    #[test]
    fn test_invalid_date_range_displays_both_ends() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 7, 12).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2024-07-12 is after 2024-07-10"
        );
    }

    #[test]
    fn test_invalid_transition_displays_statuses() {
        let error = EngineError::InvalidTransition {
            from: RequestStatus::Rejected,
            to: RequestStatus::Approved,
        };
        assert_eq!(
            error.to_string(),
            "Invalid status transition: rejected -> approved"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse policy file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_lookup_failed_displays_message() {
        let error = EngineError::LookupFailed {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Directory lookup failed: connection reset");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound { id: 1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
