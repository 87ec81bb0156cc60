//! Coverage request and result models.
//!
//! This module contains the [`CoverageRequest`] type describing an
//! HR-selected pay period, and the [`CoverageResult`] / [`CoverageReport`]
//! types produced by reconciliation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::{Employee, MonthKey};

/// Pay status of a single employee for the selected period.
///
/// # Example
///
/// ```
/// use payroll_coverage::models::PayStatus;
///
/// assert_eq!(serde_json::to_string(&PayStatus::Paid).unwrap(), "\"Paid\"");
/// assert_eq!(PayStatus::Pending.to_string(), "Pending");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayStatus {
    /// Every required month has an issued paystub.
    Paid,
    /// At least one required month has no paystub, or no month is required.
    Pending,
    /// No valid period is selected; nothing was computed.
    Unknown,
}

impl std::fmt::Display for PayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayStatus::Paid => write!(f, "Paid"),
            PayStatus::Pending => write!(f, "Pending"),
            PayStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A validated, inclusive date range `[start, end]`.
///
/// Construction rejects reversed ranges instead of swapping the bounds.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::models::CoverageRequest;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
///
/// let request = CoverageRequest::new(start, end).unwrap();
/// assert!(request.contains_date(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
/// assert!(CoverageRequest::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageRequest {
    start: NaiveDate,
    end: NaiveDate,
}

impl CoverageRequest {
    /// Creates a request, failing with [`PayrollError::InvalidRange`] when
    /// `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> PayrollResult<Self> {
        if start > end {
            return Err(PayrollError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a date falls within the range, inclusive of both bounds.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Per-employee pay status, keyed by employee business key.
///
/// Backed by a [`BTreeMap`] so equal inputs always serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageResult(BTreeMap<String, PayStatus>);

impl CoverageResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the status of an employee, replacing any previous entry.
    pub fn insert(&mut self, employee_id: impl Into<String>, status: PayStatus) {
        self.0.insert(employee_id.into(), status);
    }

    /// Looks up the status of an employee.
    pub fn get(&self, employee_id: &str) -> Option<PayStatus> {
        self.0.get(employee_id).copied()
    }

    /// Number of employees in the result.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the result holds no employees.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(employee_id, status)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PayStatus)> {
        self.0.iter().map(|(id, status)| (id.as_str(), *status))
    }

    /// Number of employees with the given status.
    pub fn count(&self, status: PayStatus) -> usize {
        self.0.values().filter(|s| **s == status).count()
    }
}

impl FromIterator<(String, PayStatus)> for CoverageResult {
    fn from_iter<I: IntoIterator<Item = (String, PayStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Coverage detail for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCoverage {
    /// The employee business key.
    pub employee_id: String,
    /// The resulting status.
    pub status: PayStatus,
    /// Required months for which a paystub exists.
    pub covered_months: Vec<MonthKey>,
    /// Required months with no paystub.
    pub missing_months: Vec<MonthKey>,
}

/// The full outcome of a coverage check.
///
/// # Example
///
/// ```
/// use payroll_coverage::models::CoverageReport;
///
/// let report = CoverageReport::unknown(&[]);
/// assert!(report.required_months.is_empty());
/// assert!(report.statuses().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// The months every employee needed a paystub for, ascending.
    pub required_months: Vec<MonthKey>,
    /// Per-employee detail, in roster order.
    pub employees: Vec<EmployeeCoverage>,
    /// Paystub records skipped for lacking an employee id or period start.
    pub excluded_records: usize,
}

impl CoverageReport {
    /// A report marking every employee [`PayStatus::Unknown`], used when no
    /// complete period is selected.
    pub fn unknown(employees: &[Employee]) -> Self {
        Self {
            required_months: Vec::new(),
            employees: employees
                .iter()
                .map(|employee| EmployeeCoverage {
                    employee_id: employee.employee_id.clone(),
                    status: PayStatus::Unknown,
                    covered_months: Vec::new(),
                    missing_months: Vec::new(),
                })
                .collect(),
            excluded_records: 0,
        }
    }

    /// Projects the report down to its status mapping.
    pub fn statuses(&self) -> CoverageResult {
        self.employees
            .iter()
            .map(|coverage| (coverage.employee_id.clone(), coverage.status))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_request_accepts_single_day() {
        let day = date(2024, 2, 14);
        let request = CoverageRequest::new(day, day).unwrap();
        assert_eq!(request.start(), request.end());
        assert!(request.contains_date(day));
    }

    #[test]
    fn test_request_rejects_reversed_range() {
        let err = CoverageRequest::new(date(2024, 3, 1), date(2024, 2, 28)).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidRange { .. }));
    }

    #[test]
    fn test_request_contains_bounds_only() {
        let request = CoverageRequest::new(date(2024, 2, 1), date(2024, 2, 28)).unwrap();
        assert!(request.contains_date(date(2024, 2, 1)));
        assert!(request.contains_date(date(2024, 2, 28)));
        assert!(!request.contains_date(date(2024, 1, 31)));
        assert!(!request.contains_date(date(2024, 2, 29)));
    }

    #[test]
    fn test_result_serializes_as_map() {
        let mut result = CoverageResult::new();
        result.insert("E2", PayStatus::Pending);
        result.insert("E1", PayStatus::Paid);
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"E1":"Paid","E2":"Pending"}"#
        );
    }

    #[test]
    fn test_result_count_by_status() {
        let result: CoverageResult = vec![
            ("E1".to_string(), PayStatus::Paid),
            ("E2".to_string(), PayStatus::Pending),
            ("E3".to_string(), PayStatus::Paid),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.count(PayStatus::Paid), 2);
        assert_eq!(result.count(PayStatus::Pending), 1);
        assert_eq!(result.count(PayStatus::Unknown), 0);
    }

    #[test]
    fn test_unknown_report_covers_every_employee() {
        let employees = vec![Employee::new("E1", "One"), Employee::new("E2", "Two")];
        let report = CoverageReport::unknown(&employees);
        let statuses = report.statuses();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses.get("E1"), Some(PayStatus::Unknown));
        assert_eq!(statuses.get("E2"), Some(PayStatus::Unknown));
    }
}
