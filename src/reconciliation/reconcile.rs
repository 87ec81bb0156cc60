//! Coverage reconciliation.
//!
//! Compares the months a period requires against the paystubs actually
//! issued and classifies each employee as [`PayStatus::Paid`] or
//! [`PayStatus::Pending`].

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{
    CoverageReport, CoverageResult, Employee, EmployeeCoverage, MonthKey, PayStatus,
    PaystubRecord,
};

/// Months with an issued paystub, grouped by employee business key.
struct IssuedMonths<'a> {
    by_employee: HashMap<&'a str, BTreeSet<MonthKey>>,
    excluded: usize,
}

impl<'a> IssuedMonths<'a> {
    /// Groups paystubs by employee, skipping records without an employee
    /// key or period start. Duplicate stubs for the same month collapse.
    fn group(paystubs: &'a [PaystubRecord]) -> Self {
        let mut by_employee: HashMap<&str, BTreeSet<MonthKey>> = HashMap::new();
        let mut excluded = 0;

        for (index, stub) in paystubs.iter().enumerate() {
            match (stub.employee_key(), stub.start_month()) {
                (Some(employee_id), Some(month)) => {
                    by_employee.entry(employee_id).or_default().insert(month);
                }
                (employee_id, month) => {
                    excluded += 1;
                    debug!(
                        record_index = index,
                        has_employee_id = employee_id.is_some(),
                        has_period_start = month.is_some(),
                        "Excluding malformed paystub record"
                    );
                }
            }
        }

        Self {
            by_employee,
            excluded,
        }
    }

    fn for_employee(&self, employee_id: &str) -> Option<&BTreeSet<MonthKey>> {
        self.by_employee.get(employee_id)
    }
}

/// Reconciles required months against issued paystubs.
///
/// # Arguments
///
/// * `required_months` - Months every employee needs a paystub for
/// * `employees` - The roster to classify
/// * `paystubs` - Issued paystub records; extra out-of-range records are
///   tolerated and simply never match
///
/// # Returns
///
/// A mapping with exactly one status per employee. An employee is
/// [`PayStatus::Paid`] only when `required_months` is non-empty and every
/// required month has a paystub whose period starts in it. An empty
/// `required_months` yields [`PayStatus::Pending`] for everyone.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::models::{Employee, PayStatus, PaystubRecord, StubPeriod};
/// use payroll_coverage::reconciliation::{expand_months, reconcile};
///
/// let months = expand_months(
///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
/// );
/// let employees = vec![Employee::new("E1", "One"), Employee::new("E2", "Two")];
/// let paystubs = vec![PaystubRecord {
///     emp_id: Some("E1".to_string()),
///     pay_period: StubPeriod {
///         start: NaiveDate::from_ymd_opt(2024, 2, 5),
///         end: None,
///     },
///     ..PaystubRecord::default()
/// }];
///
/// let result = reconcile(&months, &employees, &paystubs);
/// assert_eq!(result.get("E1"), Some(PayStatus::Paid));
/// assert_eq!(result.get("E2"), Some(PayStatus::Pending));
/// ```
pub fn reconcile(
    required_months: &[MonthKey],
    employees: &[Employee],
    paystubs: &[PaystubRecord],
) -> CoverageResult {
    reconcile_detailed(required_months, employees, paystubs).statuses()
}

/// Reconciles like [`reconcile`] but keeps the per-employee month detail
/// and the number of excluded malformed records.
pub fn reconcile_detailed(
    required_months: &[MonthKey],
    employees: &[Employee],
    paystubs: &[PaystubRecord],
) -> CoverageReport {
    let required: BTreeSet<MonthKey> = required_months.iter().copied().collect();
    let issued = IssuedMonths::group(paystubs);

    let employees = employees
        .iter()
        .map(|employee| {
            let (covered_months, missing_months): (Vec<MonthKey>, Vec<MonthKey>) =
                match issued.for_employee(&employee.employee_id) {
                    Some(months) => required.iter().partition(|m| months.contains(*m)),
                    None => (Vec::new(), required.iter().copied().collect()),
                };

            let status = if !required.is_empty() && missing_months.is_empty() {
                PayStatus::Paid
            } else {
                PayStatus::Pending
            };

            EmployeeCoverage {
                employee_id: employee.employee_id.clone(),
                status,
                covered_months,
                missing_months,
            }
        })
        .collect();

    CoverageReport {
        required_months: required.into_iter().collect(),
        employees,
        excluded_records: issued.excluded,
    }
}
