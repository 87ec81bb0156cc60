//! Application state for the payroll coverage API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::source::Snapshot;

/// Shared application state.
///
/// Holds the payroll snapshot. Handlers only read it, so no locking is
/// needed.
#[derive(Clone)]
pub struct AppState {
    /// The loaded roster and paystubs.
    snapshot: Arc<Snapshot>,
}

impl AppState {
    /// Creates a new application state with the given snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Returns a reference to the snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}
