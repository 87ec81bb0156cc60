//! Employee model.
//!
//! Employees are sourced externally and are immutable for the purposes of
//! coverage reconciliation.

use serde::{Deserialize, Serialize};

/// Represents an employee on the payroll roster.
///
/// Paystubs reference employees by [`Employee::employee_id`], the business
/// key (e.g. `"EMP008"`), never by the internal record id in `uid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Internal record id in the hosted store. Not used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Stable business key shared with paystub records.
    pub employee_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
}

impl Employee {
    /// Creates an employee with only the business key and name populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_coverage::models::Employee;
    ///
    /// let employee = Employee::new("EMP001", "Ada Lovelace");
    /// assert_eq!(employee.employee_id, "EMP001");
    /// assert!(employee.uid.is_none());
    /// ```
    pub fn new(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: None,
            employee_id: employee_id.into(),
            name: name.into(),
            email: String::new(),
            department: String::new(),
            position: String::new(),
        }
    }
}
