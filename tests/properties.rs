//! Property tests for month-range expansion and reconciliation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use payroll_coverage::models::{Employee, MonthKey, PayStatus, PaystubRecord, StubPeriod};
use payroll_coverage::reconciliation::{expand_months, reconcile};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2060, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end.year() as i64 - start.year() as i64) * 12 + end.month() as i64 - start.month() as i64 + 1
}

fn stub_for(emp_id: &str, month: MonthKey, day: u32) -> PaystubRecord {
    PaystubRecord {
        emp_id: Some(emp_id.to_string()),
        pay_period: StubPeriod {
            start: NaiveDate::from_ymd_opt(month.year(), month.month(), day),
            end: None,
        },
        ..PaystubRecord::default()
    }
}

proptest! {
    #[test]
    fn expand_same_day_is_single_month(day in arb_date()) {
        let months = expand_months(day, day);
        prop_assert_eq!(months, vec![MonthKey::from_date(day)]);
    }

    #[test]
    fn expand_reversed_is_empty(a in arb_date(), b in arb_date()) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        prop_assert!(expand_months(start, end).is_empty());
    }

    #[test]
    fn expand_counts_and_orders_months(a in arb_date(), b in arb_date()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let months = expand_months(start, end);

        prop_assert_eq!(months.len() as i64, months_between(start, end));
        prop_assert_eq!(months.first().copied(), Some(MonthKey::from_date(start)));
        prop_assert_eq!(months.last().copied(), Some(MonthKey::from_date(end)));
        prop_assert!(months.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn full_coverage_is_paid_and_any_gap_is_pending(
        a in arb_date(),
        span in 0u32..24,
        day in 1u32..=28,
        gap_seed in any::<usize>(),
    ) {
        let end = a.checked_add_months(chrono::Months::new(span)).unwrap();
        let months = expand_months(a, end);
        let employees = vec![Employee::new("E1", "One")];
        let mut paystubs: Vec<PaystubRecord> =
            months.iter().map(|m| stub_for("E1", *m, day)).collect();

        let result = reconcile(&months, &employees, &paystubs);
        prop_assert_eq!(result.get("E1"), Some(PayStatus::Paid));

        paystubs.remove(gap_seed % paystubs.len());
        let result = reconcile(&months, &employees, &paystubs);
        prop_assert_eq!(result.get("E1"), Some(PayStatus::Pending));
    }

    #[test]
    fn reconcile_is_idempotent(
        a in arb_date(),
        b in arb_date(),
        starts in proptest::collection::vec(arb_date(), 0..20),
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let months = expand_months(start, end);
        let employees = vec![Employee::new("E1", "One"), Employee::new("E2", "Two")];
        let paystubs: Vec<PaystubRecord> = starts
            .iter()
            .enumerate()
            .map(|(i, d)| stub_for(if i % 2 == 0 { "E1" } else { "E2" }, MonthKey::from_date(*d), d.day()))
            .collect();

        let first = reconcile(&months, &employees, &paystubs);
        let second = reconcile(&months, &employees, &paystubs);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 2);
        prop_assert_eq!(first.count(PayStatus::Unknown), 0);
    }

    #[test]
    fn employee_without_stubs_is_never_paid(a in arb_date(), b in arb_date()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let months = expand_months(start, end);
        let result = reconcile(&months, &[Employee::new("E1", "One")], &[]);
        prop_assert_eq!(result.get("E1"), Some(PayStatus::Pending));
    }
}

#[test]
fn empty_requirement_is_pending_for_everyone() {
    let employees = vec![Employee::new("E1", "One"), Employee::new("E2", "Two")];
    let month = MonthKey::new(2024, 2).unwrap();
    let paystubs = vec![stub_for("E1", month, 1), stub_for("E2", month, 1)];

    let result = reconcile(&[], &employees, &paystubs);
    assert_eq!(result.count(PayStatus::Pending), 2);
}
