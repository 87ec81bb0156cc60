//! Core data models for the payroll coverage engine.
//!
//! This module contains all the domain models used throughout the engine.

mod coverage;
mod employee;
mod month_key;
mod paystub;

pub use coverage::{CoverageReport, CoverageRequest, CoverageResult, EmployeeCoverage, PayStatus};
pub use employee::Employee;
pub use month_key::{MonthKey, ParseMonthKeyError};
pub use paystub::{PaystubRecord, StubPeriod, UNKNOWN_MONTH_LABEL, parse_calendar_date};
