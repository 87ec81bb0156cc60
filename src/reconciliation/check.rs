//! Coverage check orchestration.
//!
//! Drives a full coverage check from the two date pickers: detects an
//! incomplete selection, rejects reversed ranges, narrows the paystubs to
//! the selected range, then expands and reconciles.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::PayrollResult;
use crate::models::{CoverageReport, CoverageRequest, Employee, PaystubRecord};

use super::{expand_months, reconcile_detailed};

/// Runs a coverage check for an optional start and end date.
///
/// # Returns
///
/// - Every employee [`Unknown`](crate::models::PayStatus::Unknown) when
///   either bound is missing; nothing is computed.
/// - [`PayrollError::InvalidRange`](crate::error::PayrollError::InvalidRange)
///   when `start > end`; no partial report is produced.
/// - Otherwise the reconciled report, counting only paystubs whose period
///   starts inside `[start, end]`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::models::{Employee, PayStatus, PaystubRecord, StubPeriod};
/// use payroll_coverage::reconciliation::check_coverage;
///
/// let employees = vec![Employee::new("E1", "One")];
/// let paystubs = vec![PaystubRecord {
///     emp_id: Some("E1".to_string()),
///     pay_period: StubPeriod {
///         start: NaiveDate::from_ymd_opt(2024, 1, 10),
///         end: NaiveDate::from_ymd_opt(2024, 1, 31),
///     },
///     ..PaystubRecord::default()
/// }];
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let end = NaiveDate::from_ymd_opt(2024, 2, 28);
/// let report = check_coverage(start, end, &employees, &paystubs).unwrap();
/// assert_eq!(report.statuses().get("E1"), Some(PayStatus::Pending));
///
/// let unselected = check_coverage(start, None, &employees, &paystubs).unwrap();
/// assert_eq!(unselected.statuses().get("E1"), Some(PayStatus::Unknown));
///
/// assert!(check_coverage(end, start, &employees, &paystubs).is_err());
/// ```
pub fn check_coverage(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    employees: &[Employee],
    paystubs: &[PaystubRecord],
) -> PayrollResult<CoverageReport> {
    let (Some(start), Some(end)) = (start, end) else {
        debug!("No complete pay period selected");
        return Ok(CoverageReport::unknown(employees));
    };

    let request = CoverageRequest::new(start, end)?;
    let in_range = select_in_range(&request, paystubs);
    let required_months = expand_months(request.start(), request.end());

    debug!(
        start = %request.start(),
        end = %request.end(),
        required_months = required_months.len(),
        paystubs_in_range = in_range.len(),
        "Reconciling pay period"
    );

    Ok(reconcile_detailed(&required_months, employees, &in_range))
}

/// Keeps the paystubs whose period starts inside the request range, plus
/// those with no readable start so they are still counted as excluded.
fn select_in_range(request: &CoverageRequest, paystubs: &[PaystubRecord]) -> Vec<PaystubRecord> {
    paystubs
        .iter()
        .filter(|stub| {
            stub.pay_period
                .start
                .is_none_or(|start| request.contains_date(start))
        })
        .cloned()
        .collect()
}
