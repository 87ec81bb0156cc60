//! Error types for the payroll coverage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine surfaces to its callers. Malformed paystub
//! records are deliberately absent: they are excluded during reconciliation
//! and never abort a report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll coverage engine.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::error::PayrollError;
///
/// let error = PayrollError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid range: end date 2024-02-01 is before start date 2024-03-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The requested pay period ends before it starts.
    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A snapshot file was not found at the specified path.
    #[error("Source file not found: {path}")]
    SourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A snapshot file could not be parsed.
    #[error("Failed to parse source file '{path}': {message}")]
    SourceParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee with the given business key exists in the roster.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee identifier that was looked up.
        employee_id: String,
    },

    /// Server configuration was missing or invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// A description of the configuration problem.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = PayrollError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid range: end date 2024-05-01 is before start date 2024-05-10"
        );
    }

    #[test]
    fn test_source_not_found_displays_path() {
        let error = PayrollError::SourceNotFound {
            path: "/missing/employees.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Source file not found: /missing/employees.yaml"
        );
    }

    #[test]
    fn test_source_parse_error_displays_path_and_message() {
        let error = PayrollError::SourceParseError {
            path: "/data/paystubs.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse source file '/data/paystubs.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = PayrollError::EmployeeNotFound {
            employee_id: "EMP404".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: EMP404");
    }

    #[test]
    fn test_config_error_displays_message() {
        let error = PayrollError::ConfigError {
            message: "bind_address is empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: bind_address is empty"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::EmployeeNotFound {
                employee_id: "EMP001".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
