//! Backend HTTP client
//!
//! The dashboard consumes two read-only endpoints of the messaging backend:
//! the recent-passenger listing and the health probe. The webhook ingestion
//! endpoint is only ever displayed to the operator, never called.

use serde::Deserialize;
use thiserror::Error;

use crate::types::passenger::Passenger;

/// Fixed look-back window for the recent-passenger listing.
pub const RECENT_WINDOW_MONTHS: u32 = 3;

/// Errors from backend calls.
///
/// Callers treat every variant the same way: log it and fall back to an
/// empty or offline view. Nothing is surfaced to the operator as an error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend returned HTTP {0}")]
    Status(u16),
}

/// Body of `GET /api/health`.
#[derive(Debug, Deserialize)]
pub struct BackendHealth {
    pub status: String,
}

/// Client for the messaging backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the validated config value (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The ingestion endpoint operators can POST test messages to.
    ///
    /// Informational only; nothing in the dashboard calls it.
    pub fn webhook_url(&self) -> String {
        format!("{}/webhook/whatsapp", self.base_url)
    }

    /// Build the recent-passengers request without sending it.
    fn recent_passengers_request(&self) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/api/passengers/recent", self.base_url))
            .query(&[("months", RECENT_WINDOW_MONTHS)])
    }

    /// Fetch passengers seen in the last [`RECENT_WINDOW_MONTHS`] months,
    /// in the order the backend returns them.
    pub async fn recent_passengers(&self) -> Result<Vec<Passenger>, ApiError> {
        let response = self.recent_passengers_request().send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Vec<Passenger>>().await?)
    }

    /// Probe `GET /api/health`. Used once at startup for the status pill.
    pub async fn health(&self) -> Result<BackendHealth, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(response.json::<BackendHealth>().await?)
    }
}
