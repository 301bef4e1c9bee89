//! Shared application state for the dashboard server

use crate::table::FlightTable;
use std::sync::Arc;

/// Shared application state.
///
/// The table is loaded once at startup and never mutated, so handlers share
/// it read-only with no locking.
#[derive(Clone)]
pub struct AppState {
    /// The immutable flight table
    pub table: Arc<FlightTable>,
}

impl AppState {
    /// Creates the application state around a loaded table.
    pub fn new(table: FlightTable) -> Self {
        AppState {
            table: Arc::new(table),
        }
    }
}
