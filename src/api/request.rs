//! Request types for the payroll coverage API.
//!
//! This module defines the JSON request structures for the `/coverage`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

/// Request body for the `/coverage` endpoint.
///
/// Both dates come straight from the date pickers. An unset picker is sent
/// as `null`, an empty string, or omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageCheckRequest {
    /// The first day of the selected pay period.
    #[serde(default, deserialize_with = "picker_date")]
    pub start_date: Option<NaiveDate>,
    /// The last day of the selected pay period.
    #[serde(default, deserialize_with = "picker_date")]
    pub end_date: Option<NaiveDate>,
}

impl CoverageCheckRequest {
    /// Returns both bounds when the selection is complete.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date.zip(self.end_date)
    }
}

fn picker_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", s, e))),
    }
}
