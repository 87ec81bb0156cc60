//! HTTP API module for the payroll coverage engine.
//!
//! This module provides the REST endpoints HR and employee views call:
//! pay-period coverage and per-employee paystub history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CoverageCheckRequest;
pub use response::{ApiError, CoverageResponse};
pub use state::AppState;
