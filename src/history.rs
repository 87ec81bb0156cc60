//! Employee paystub history.
//!
//! Builds the self-service view of an employee's paystubs: newest first,
//! each with its earnings summary, plus the distinct month labels and a
//! net-pay series for charting.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PaystubRecord, StubPeriod};

/// Earnings breakdown of a single paystub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaystubSummary {
    /// Month label derived from the period end, e.g. `"March 2024"`.
    pub month: String,
    /// The period covered.
    pub pay_period: StubPeriod,
    /// Hourly base rate.
    pub base_rate: Decimal,
    /// Hours worked.
    pub hours_worked: Decimal,
    /// `base_rate * hours_worked`.
    pub base_pay: Decimal,
    /// Bonus amount.
    pub bonus: Decimal,
    /// Overtime amount.
    pub overtime: Decimal,
    /// Base pay plus bonus and overtime.
    pub total_earnings: Decimal,
    /// Total deductions.
    pub deductions: Decimal,
    /// Total earnings less deductions.
    pub net_pay: Decimal,
}

impl From<&PaystubRecord> for PaystubSummary {
    fn from(stub: &PaystubRecord) -> Self {
        Self {
            month: stub.month_label(),
            pay_period: stub.pay_period.clone(),
            base_rate: stub.base_rate,
            hours_worked: stub.hours_worked,
            base_pay: stub.base_pay(),
            bonus: stub.bonus,
            overtime: stub.overtime,
            total_earnings: stub.total_earnings(),
            deductions: stub.deductions,
            net_pay: stub.net_pay(),
        }
    }
}

/// One point of the net-pay chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPayPoint {
    /// Month label of the paystub.
    pub label: String,
    /// Net pay of the paystub.
    pub net: Decimal,
}

/// An employee's paystubs, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaystubHistory {
    /// The employee business key.
    pub employee_id: String,
    /// Summaries sorted by period end, descending. Stubs without an end
    /// date come last.
    pub paystubs: Vec<PaystubSummary>,
    /// Distinct month labels in the same order.
    pub months: Vec<String>,
    /// Net pay per paystub, in the same order.
    pub net_pay_series: Vec<NetPayPoint>,
}

impl PaystubHistory {
    /// The most recent paystub, if any.
    pub fn latest(&self) -> Option<&PaystubSummary> {
        self.paystubs.first()
    }

    /// The first paystub whose month label matches `month`.
    pub fn find_month(&self, month: &str) -> Option<&PaystubSummary> {
        self.paystubs.iter().find(|p| p.month == month)
    }
}

/// Builds the paystub history of one employee.
///
/// Only records whose employee key equals `employee_id` are included.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::history::paystub_history;
/// use payroll_coverage::models::{PaystubRecord, StubPeriod};
///
/// let stub = |month: u32| PaystubRecord {
///     emp_id: Some("EMP001".to_string()),
///     pay_period: StubPeriod {
///         start: NaiveDate::from_ymd_opt(2024, month, 1),
///         end: NaiveDate::from_ymd_opt(2024, month, 28),
///     },
///     ..PaystubRecord::default()
/// };
///
/// let history = paystub_history("EMP001", &[stub(1), stub(3), stub(2)]);
/// assert_eq!(history.months, vec!["March 2024", "February 2024", "January 2024"]);
/// assert_eq!(history.latest().unwrap().month, "March 2024");
/// ```
pub fn paystub_history(employee_id: &str, paystubs: &[PaystubRecord]) -> PaystubHistory {
    let mut own: Vec<&PaystubRecord> = paystubs
        .iter()
        .filter(|stub| stub.employee_key() == Some(employee_id))
        .collect();

    // Newest end date first; a missing end sorts as the oldest.
    own.sort_by_key(|stub| std::cmp::Reverse(stub.pay_period.end.unwrap_or(NaiveDate::MIN)));

    let paystubs: Vec<PaystubSummary> = own.into_iter().map(PaystubSummary::from).collect();

    let mut seen = HashSet::new();
    let months = paystubs
        .iter()
        .filter(|p| seen.insert(p.month.clone()))
        .map(|p| p.month.clone())
        .collect();

    let net_pay_series = paystubs
        .iter()
        .map(|p| NetPayPoint {
            label: p.month.clone(),
            net: p.net_pay,
        })
        .collect();

    PaystubHistory {
        employee_id: employee_id.to_string(),
        paystubs,
        months,
        net_pay_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_MONTH_LABEL;

    fn stub(emp_id: &str, end: Option<NaiveDate>, base_rate: i64) -> PaystubRecord {
        PaystubRecord {
            emp_id: Some(emp_id.to_string()),
            pay_period: StubPeriod { start: None, end },
            base_rate: Decimal::from(base_rate),
            hours_worked: Decimal::from(10),
            ..PaystubRecord::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_only_own_paystubs_included() {
        let paystubs = vec![
            stub("EMP001", date(2024, 1, 31), 20),
            stub("EMP002", date(2024, 1, 31), 30),
        ];
        let history = paystub_history("EMP001", &paystubs);
        assert_eq!(history.paystubs.len(), 1);
        assert_eq!(history.paystubs[0].base_pay, Decimal::from(200));
    }

    #[test]
    fn test_sorted_newest_first_missing_end_last() {
        let paystubs = vec![
            stub("EMP001", None, 1),
            stub("EMP001", date(2023, 12, 31), 2),
            stub("EMP001", date(2024, 2, 29), 3),
        ];
        let history = paystub_history("EMP001", &paystubs);
        let labels: Vec<&str> = history.paystubs.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(labels, vec!["February 2024", "December 2023", UNKNOWN_MONTH_LABEL]);
    }

    #[test]
    fn test_months_are_distinct() {
        let paystubs = vec![
            stub("EMP001", date(2024, 1, 15), 1),
            stub("EMP001", date(2024, 1, 31), 2),
        ];
        let history = paystub_history("EMP001", &paystubs);
        assert_eq!(history.paystubs.len(), 2);
        assert_eq!(history.months, vec!["January 2024"]);
        assert_eq!(history.net_pay_series.len(), 2);
    }

    #[test]
    fn test_find_month_returns_newest_match() {
        let paystubs = vec![
            stub("EMP001", date(2024, 1, 15), 1),
            stub("EMP001", date(2024, 1, 31), 2),
        ];
        let history = paystub_history("EMP001", &paystubs);
        let found = history.find_month("January 2024").unwrap();
        assert_eq!(found.base_rate, Decimal::from(2));
        assert!(history.find_month("June 2024").is_none());
    }

    #[test]
    fn test_empty_history() {
        let history = paystub_history("EMP001", &[]);
        assert!(history.latest().is_none());
        assert!(history.months.is_empty());
    }
}
