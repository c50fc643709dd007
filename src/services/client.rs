//! HTTP client for the prediction server
//!
//! `PredictionTransport` is the seam between the form controller and the
//! network. The application talks to an `Arc<dyn PredictionTransport>`,
//! which is `HttpPredictionClient` in production and a stub in tests.

use crate::config::Config;
use crate::model::{PredictionResponse, SubmissionPayload};
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Failure to complete a request or to decode its body
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Anything that can carry a submission to the prediction server
pub trait PredictionTransport: Send + Sync {
    /// Submit the form fields and decode the server's answer
    fn predict(&self, payload: &SubmissionPayload) -> Result<PredictionResponse, TransportError>;

    /// Ask the server whether it is up
    fn health(&self) -> Result<HealthStatus, TransportError>;
}

/// Blocking reqwest client, run from background threads only
pub struct HttpPredictionClient {
    base_url: String,
    client: Client,
}

impl HttpPredictionClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl PredictionTransport for HttpPredictionClient {
    fn predict(&self, payload: &SubmissionPayload) -> Result<PredictionResponse, TransportError> {
        let form = payload
            .entries
            .iter()
            .fold(multipart::Form::new(), |form, (key, value)| {
                form.text(*key, value.clone())
            });

        // Status is not checked; failures carry the same JSON body.
        let body = self
            .client
            .post(self.url("/predict"))
            .multipart(form)
            .send()
            .and_then(|response| response.text())
            .map_err(|e| TransportError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    fn health(&self) -> Result<HealthStatus, TransportError> {
        let body = self
            .client
            .get(self.url("/health"))
            .send()
            .and_then(|response| response.text())
            .map_err(|e| TransportError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
