//! Month-range expansion.
//!
//! Turns a date range into the ordered list of calendar months it touches.

use chrono::NaiveDate;

use crate::models::MonthKey;

/// Expands `[start, end]` into every calendar month it touches.
///
/// Both bounds are widened to whole months: `start` to the first of its
/// month and `end` to the last of its month. One [`MonthKey`] is emitted per
/// month, ascending and without duplicates.
///
/// # Returns
///
/// An empty vector when `start > end`. Callers must validate the range
/// beforehand: an empty result is not "no months required".
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::reconciliation::expand_months;
///
/// let months = expand_months(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
/// );
/// let keys: Vec<String> = months.iter().map(ToString::to_string).collect();
/// assert_eq!(keys, vec!["2024-01", "2024-02", "2024-03"]);
/// ```
pub fn expand_months(start: NaiveDate, end: NaiveDate) -> Vec<MonthKey> {
    if start > end {
        return Vec::new();
    }

    let last = MonthKey::from_date(end);
    let mut current = MonthKey::from_date(start);
    let mut months = Vec::new();

    loop {
        months.push(current);
        if current >= last {
            break;
        }
        match current.succ() {
            Some(next) => current = next,
            None => break,
        }
    }

    months
}
