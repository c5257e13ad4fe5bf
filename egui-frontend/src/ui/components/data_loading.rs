//! # Data Loading Module
//!
//! Applies the startup fetch result to application state.
//!
//! ## Data Flow:
//! 1. The worker thread finishes the one `GET /api/data` request
//! 2. The update loop polls the channel each frame
//! 3. On success the dataset snapshot is replaced wholesale
//! 4. On failure the error is logged and the empty state is kept
//!
//! No retry, no fallback data, no user-facing error element.

use log::{error, info};

use crate::domain::DatasetSnapshot;
use crate::ui::app_state::CustomerDashboardApp;

impl CustomerDashboardApp {
    /// Poll the in-flight startup fetch and apply its result, at most once.
    pub fn poll_pending_fetch(&mut self) {
        let Some(fetch) = &self.pending_fetch else {
            return;
        };
        let Some(result) = fetch.try_take() else {
            return;
        };
        self.pending_fetch = None;

        match result {
            Ok(data) => {
                info!(
                    "Loaded {} customers and {} transactions",
                    data.customers.len(),
                    data.transactions.len()
                );
                self.snapshot = DatasetSnapshot::new(data);
            }
            Err(e) => {
                error!("Failed to fetch dashboard data: {}", e);
            }
        }
    }
}
