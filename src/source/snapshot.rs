//! Snapshot loading functionality.
//!
//! This module provides the [`Snapshot`] type, an immutable in-memory copy
//! of the employee roster and issued paystubs loaded from YAML files.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PaystubRecord};

#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct PaystubsFile {
    #[serde(default)]
    paystubs: Vec<PaystubRecord>,
}

/// An immutable copy of the roster and paystub collections.
///
/// # Directory Structure
///
/// ```text
/// data/
/// ├── employees.yaml   # `employees:` list of roster entries
/// └── paystubs.yaml    # `paystubs:` list of issued paystubs
/// ```
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use payroll_coverage::source::Snapshot;
///
/// let snapshot = Snapshot::load("./data/sample")?;
/// let february = snapshot.paystubs_starting_between(
///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
/// );
/// println!("{} stubs issued in February", february.len());
/// # Ok::<(), payroll_coverage::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    employees: Vec<Employee>,
    paystubs: Vec<PaystubRecord>,
}

impl Snapshot {
    /// Creates a snapshot from collections already in memory.
    pub fn new(employees: Vec<Employee>, paystubs: Vec<PaystubRecord>) -> Self {
        Self {
            employees,
            paystubs,
        }
    }

    /// Loads `employees.yaml` and `paystubs.yaml` from `path`.
    ///
    /// # Returns
    ///
    /// Returns the snapshot on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - A roster entry lacks a required field
    ///
    /// Individual paystub fields are never required, so malformed paystubs
    /// load and are later excluded from reconciliation.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?.employees;
        let paystubs = Self::load_yaml::<PaystubsFile>(&path.join("paystubs.yaml"))?.paystubs;

        info!(
            path = %path.display(),
            employees = employees.len(),
            paystubs = paystubs.len(),
            "Loaded payroll snapshot"
        );

        Ok(Self::new(employees, paystubs))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::SourceNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::SourceParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The full roster.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All paystub records.
    pub fn paystubs(&self) -> &[PaystubRecord] {
        &self.paystubs
    }

    /// Gets an employee by business key.
    pub fn find_employee(&self, employee_id: &str) -> PayrollResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Paystubs whose period starts inside `[start, end]`.
    ///
    /// Records without a readable start are kept so reconciliation can
    /// account for them as excluded.
    pub fn paystubs_starting_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<PaystubRecord> {
        self.paystubs
            .iter()
            .filter(|stub| {
                stub.pay_period
                    .start
                    .is_none_or(|s| s >= start && s <= end)
            })
            .cloned()
            .collect()
    }

    /// Paystubs issued to one employee.
    pub fn paystubs_for(&self, employee_id: &str) -> Vec<PaystubRecord> {
        self.paystubs
            .iter()
            .filter(|stub| stub.employee_key() == Some(employee_id))
            .cloned()
            .collect()
    }
}
