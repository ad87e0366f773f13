//! # Minecraft Server Status Client
//!
//! Fetches the status document exposed by the server plugin at
//! `GET {MC_SERVER_URL}/status`.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::models::ServerStatus;
use crate::utils::constant::STATUS_FETCH_TIMEOUT;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("status request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("status endpoint returned {0}")]
    UnexpectedStatus(StatusCode),
}

#[derive(Debug, Clone)]
pub struct StatusClient {
    status_url: String,
    http_client: reqwest::Client,
}

impl StatusClient {
    /// Creates a client for the status API rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            status_url: format!("{}/status", base_url.trim_end_matches('/')),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    /// Fetches and decodes the status document.
    ///
    /// # Errors
    ///
    /// - [`StatusError::UnexpectedStatus`] for any response other than `200 OK`
    /// - [`StatusError::Request`] on network failure, timeout or an undecodable body
    #[instrument(skip(self), fields(url = %self.status_url))]
    pub async fn fetch_status(&self) -> Result<ServerStatus, StatusError> {
        let response = self
            .http_client
            .get(&self.status_url)
            .timeout(STATUS_FETCH_TIMEOUT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(StatusError::UnexpectedStatus(response.status()));
        }

        let status = response.json::<ServerStatus>().await?;
        debug!(?status, "Fetched server status");
        Ok(status)
    }

    /// Like [`Self::fetch_status`], but treats every failure as "server offline".
    pub async fn fetch(&self) -> Option<ServerStatus> {
        match self.fetch_status().await {
            Ok(status) => Some(status),
            Err(e) => {
                error!(error = %e, "Failed to fetch server status");
                None
            }
        }
    }
}
