//! Paystub records and their earnings figures.
//!
//! Records arrive from the document store exactly as issued. Any field may
//! be missing or malformed, so the reconciliation-relevant fields are
//! optional and dates are parsed leniently: an unreadable date becomes
//! `None` rather than failing the whole snapshot.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::MonthKey;

/// Label used for paystubs whose period has no end date.
pub const UNKNOWN_MONTH_LABEL: &str = "Unknown";

/// The period a paystub was issued for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubPeriod {
    /// First day of the period.
    #[serde(default, deserialize_with = "lenient_date")]
    pub start: Option<NaiveDate>,
    /// Last day of the period.
    #[serde(default, deserialize_with = "lenient_date")]
    pub end: Option<NaiveDate>,
}

/// A single issued paystub.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::models::{PaystubRecord, StubPeriod};
/// use rust_decimal::Decimal;
///
/// let stub = PaystubRecord {
///     emp_id: Some("EMP001".to_string()),
///     pay_period: StubPeriod {
///         start: NaiveDate::from_ymd_opt(2024, 2, 1),
///         end: NaiveDate::from_ymd_opt(2024, 2, 29),
///     },
///     base_rate: Decimal::new(2500, 2),
///     hours_worked: Decimal::from(160),
///     bonus: Decimal::from(200),
///     overtime: Decimal::from(150),
///     deductions: Decimal::from(600),
///     ..PaystubRecord::default()
/// };
///
/// assert_eq!(stub.base_pay(), Decimal::from(4000));
/// assert_eq!(stub.total_earnings(), Decimal::from(4350));
/// assert_eq!(stub.net_pay(), Decimal::from(3750));
/// assert_eq!(stub.month_label(), "February 2024");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaystubRecord {
    /// Business key of the employee this stub was issued to.
    #[serde(default)]
    pub emp_id: Option<String>,
    /// The period covered by this stub.
    #[serde(default)]
    pub pay_period: StubPeriod,
    /// Employee name as printed on the stub.
    #[serde(default)]
    pub name: String,
    /// Employee email as printed on the stub.
    #[serde(default)]
    pub email: String,
    /// Employee department as printed on the stub.
    #[serde(default)]
    pub department: String,
    /// Hourly base rate.
    #[serde(default)]
    pub base_rate: Decimal,
    /// Hours worked in the period.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Bonus amount.
    #[serde(default)]
    pub bonus: Decimal,
    /// Overtime amount.
    #[serde(default)]
    pub overtime: Decimal,
    /// Total deductions.
    #[serde(default)]
    pub deductions: Decimal,
}

impl PaystubRecord {
    /// The employee business key, or `None` when absent or empty.
    ///
    /// The key is returned verbatim and compared exactly against the roster.
    pub fn employee_key(&self) -> Option<&str> {
        self.emp_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The calendar month of the period start, if the start is known.
    pub fn start_month(&self) -> Option<MonthKey> {
        self.pay_period.start.map(MonthKey::from_date)
    }

    /// Base pay: `base_rate * hours_worked`.
    pub fn base_pay(&self) -> Decimal {
        self.base_rate * self.hours_worked
    }

    /// Base pay plus bonus and overtime.
    pub fn total_earnings(&self) -> Decimal {
        self.base_pay() + self.bonus + self.overtime
    }

    /// Total earnings less deductions.
    pub fn net_pay(&self) -> Decimal {
        self.total_earnings() - self.deductions
    }

    /// Human-readable month of the period end, e.g. `"March 2024"`.
    ///
    /// Returns [`UNKNOWN_MONTH_LABEL`] when the period has no end date.
    pub fn month_label(&self) -> String {
        match self.pay_period.end {
            Some(end) => end.format("%B %Y").to_string(),
            None => UNKNOWN_MONTH_LABEL.to_string(),
        }
    }
}

/// Parses a calendar date from the forms the store is known to hold.
///
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or an
/// RFC 3339 timestamp. Timestamps with an offset are converted to UTC before
/// the calendar date is taken.
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::models::parse_calendar_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
/// assert_eq!(parse_calendar_date("2024-03-01"), expected);
/// assert_eq!(parse_calendar_date("2024-03-01T08:30:00"), expected);
/// assert_eq!(parse_calendar_date("2024-03-01T23:30:00-02:00"), NaiveDate::from_ymd_opt(2024, 3, 2));
/// assert_eq!(parse_calendar_date("not a date"), None);
/// ```
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => parse_calendar_date(&s),
        _ => None,
    })
}
