//! Pay-period coverage engine for an HR payroll portal.
//!
//! This crate determines, per employee, whether every calendar month touched
//! by an HR-selected date range has an issued paystub, and serves that
//! status together with employee paystub history over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod reconciliation;
pub mod source;
