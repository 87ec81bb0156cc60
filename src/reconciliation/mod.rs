//! Pay-period reconciliation for the payroll coverage engine.
//!
//! This module contains the month-range expansion that turns a selected
//! period into required calendar months, the reconciliation that compares
//! those months against issued paystubs, and the coverage check that
//! validates a selection before running both.
//!
//! All functions are synchronous and pure: they borrow their inputs,
//! never mutate them and keep no state between calls.

mod check;
mod month_range;
mod reconcile;

pub use check::check_coverage;
pub use month_range::expand_months;
pub use reconcile::{reconcile, reconcile_detailed};
