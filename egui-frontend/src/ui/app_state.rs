//! # App State Module
//!
//! Central state for the customer dashboard.
//!
//! ## Key Types:
//! - `CustomerDashboardApp` - main application state struct
//!
//! ## Purpose:
//! The app holds all state in one place: the dataset snapshot, the table
//! filter, the chart selection, and the handle for the in-flight startup
//! fetch. Everything the UI shows is re-derived from these slots on each
//! frame, following the single source of truth principle.

use log::info;

use crate::domain::DatasetSnapshot;
use crate::services::api::{ApiClient, PendingFetch};
use crate::ui::state::{ChartState, TableState};

/// Main application struct for the egui customer dashboard
pub struct CustomerDashboardApp {
    /// Current dataset; empty until the startup fetch succeeds
    pub snapshot: DatasetSnapshot,

    /// Customer table state (filter text)
    pub table: TableState,

    /// Selection and chart projection state
    pub chart: ChartState,

    /// The single outstanding `GET /api/data` request, `None` once applied
    pub pending_fetch: Option<PendingFetch>,
}

impl CustomerDashboardApp {
    /// Create the app and start the one startup fetch.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing customer dashboard");
        crate::ui::components::styling::setup_dashboard_style(&cc.egui_ctx);
        Self::with_client(ApiClient::new(), Some(cc.egui_ctx.clone()))
    }

    /// Create the app against a specific API client.
    ///
    /// `ctx` wakes the UI when the fetch lands; tests pass `None` and poll.
    pub fn with_client(client: ApiClient, ctx: Option<egui::Context>) -> Self {
        Self {
            snapshot: DatasetSnapshot::default(),
            table: TableState::new(),
            chart: ChartState::new(),
            pending_fetch: Some(PendingFetch::spawn(client, ctx)),
        }
    }
}
