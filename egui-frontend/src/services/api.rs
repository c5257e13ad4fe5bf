//! # API Client Module
//!
//! HTTP access to the dashboard API, plus the background worker that
//! performs the single startup fetch.
//!
//! ## Key Types:
//! - `ApiClient` - blocking client for `GET /api/data`
//! - `ApiError` - the three failure kinds of the one outbound request
//! - `PendingFetch` - handle for the in-flight startup fetch
//!
//! ## Purpose:
//! The UI never blocks on the network. The one request the app makes runs
//! on a worker thread and hands its result back over a channel the app
//! polls each frame. Dropping the app drops the receiver, so a response
//! that lands after teardown is discarded instead of mutating dead state.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use log::info;
use shared::DashboardData;
use thiserror::Error;

/// Default base URL of the dashboard API.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Upper bound on how long the startup request may stay in flight.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure kinds for the dashboard fetch.
///
/// All three are logged and swallowed at the data-loading seam; the view
/// keeps its empty initial state. They stay distinct so the log line says
/// whether the server was unreachable, unhappy, or speaking garbage.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body did not match the dashboard schema
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Blocking client for the dashboard API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch the full dashboard dataset from `GET /api/data`.
    ///
    /// The body is validated against the `shared` schema before anything
    /// reaches the view; a mismatch fails with
    /// [`ApiError::MalformedPayload`] rather than half-parsed records.
    pub fn get_dashboard_data(&self) -> Result<DashboardData, ApiError> {
        let url = format!("{}/api/data", self.base_url);
        let response = self.client.get(&url).timeout(REQUEST_TIMEOUT).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text()?;
        let data = serde_json::from_str::<DashboardData>(&body)?;
        Ok(data)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for the in-flight startup fetch.
///
/// The worker owns only the sender half of the channel. Once the app (and
/// with it the receiver) is gone, the send fails and the result is
/// discarded; a torn-down UI can never be mutated by a late response.
pub struct PendingFetch {
    rx: mpsc::Receiver<Result<DashboardData, ApiError>>,
}

impl PendingFetch {
    /// Spawn the worker thread for the single `GET /api/data` request.
    ///
    /// `ctx` is used to wake the UI once the result is ready; tests pass
    /// `None` and poll directly.
    pub fn spawn(client: ApiClient, ctx: Option<egui::Context>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = client.get_dashboard_data();
            if tx.send(result).is_err() {
                info!("Dashboard fetch finished after teardown, discarding result");
                return;
            }
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
        Self { rx }
    }

    /// Non-blocking poll for the worker's result.
    ///
    /// Returns the result exactly once; every later call returns `None`.
    pub fn try_take(&self) -> Option<Result<DashboardData, ApiError>> {
        self.rx.try_recv().ok()
    }
}
