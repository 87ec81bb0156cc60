//! Calendar month keys.
//!
//! A [`MonthKey`] identifies a calendar month by its year and month number,
//! independent of day-of-month and of any timezone. Keys order
//! chronologically and render as `yyyy-MM`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a valid `yyyy-MM` month key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid month key '{input}': expected yyyy-MM")]
pub struct ParseMonthKeyError {
    /// The rejected input.
    pub input: String,
}

/// A calendar month, ordered chronologically.
///
/// Field order matters: the derived [`Ord`] compares the year first and the
/// month second.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_coverage::models::MonthKey;
///
/// let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(key.to_string(), "2024-02");
/// assert!(key < MonthKey::new(2024, 3).unwrap());
/// assert!(key > MonthKey::new(2023, 12).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key, returning `None` if `month` is outside `1..=12`
    /// or the year is outside the supported calendar.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, `1` for January through `12` for December.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key always holds a valid calendar month")
    }

    /// The last day of this month.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_coverage::models::MonthKey;
    ///
    /// let feb = MonthKey::new(2024, 2).unwrap();
    /// assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    /// ```
    pub fn last_day(&self) -> NaiveDate {
        match self.succ() {
            Some(next) => next
                .first_day()
                .pred_opt()
                .expect("day before a valid first-of-month exists"),
            None => NaiveDate::from_ymd_opt(self.year, 12, 31)
                .expect("december 31st of a supported year exists"),
        }
    }

    /// The following month, rolling December over into January of the next
    /// year. Returns `None` past the end of the supported calendar.
    pub fn succ(&self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year.checked_add(1)?, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Returns true if `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseMonthKeyError {
            input: s.to_string(),
        };
        let (year, month) = s.rsplit_once('-').ok_or_else(error)?;
        if month.len() != 2 {
            return Err(error());
        }
        let year: i32 = year.parse().map_err(|_| error())?;
        let month: u32 = month.parse().map_err(|_| error())?;
        Self::new(year, month).ok_or_else(error)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ParseMonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}
