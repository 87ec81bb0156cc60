//! Employee and paystub data for the payroll coverage engine.
//!
//! The hosted document store is replaced at this boundary by a
//! [`Snapshot`]: the roster and the issued paystubs loaded wholesale from
//! YAML files and shared read-only.
//!
//! # Example
//!
//! ```no_run
//! use payroll_coverage::source::Snapshot;
//!
//! let snapshot = Snapshot::load("./data/sample").unwrap();
//! println!("Loaded {} employees", snapshot.employees().len());
//! ```

mod snapshot;

pub use snapshot::Snapshot;
