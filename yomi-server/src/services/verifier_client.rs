//! HTTP verification client
//!
//! Re-resolves a single surface's reading through an external verification
//! service (an LLM gateway in the deployed system). Wire contract:
//!
//! `POST {endpoint}` with `{"surface": "..."}` →
//! `{"reading": "...", "confidence": 0.0-1.0}`
//!
//! Every call is bounded by the client timeout; any transport, status, or
//! decode failure is a [`VerifyError`], which the annotation core absorbs.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use yomi_core::{ReadingVerifier, VerifiedReading, VerifyError};

/// Request payload sent to the verification service
#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    surface: &'a str,
}

/// Response payload from the verification service
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    reading: String,
    confidence: f64,
}

/// Reqwest-backed verification collaborator
pub struct HttpVerifier {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpVerifier {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Result<Self, VerifyError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| VerifyError::Backend(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ReadingVerifier for HttpVerifier {
    async fn verify(&self, surface: &str) -> Result<VerifiedReading, VerifyError> {
        debug!(surface = %surface, endpoint = %self.endpoint, "dispatching verification");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&VerifyRequest { surface })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VerifyError::Timeout
                } else {
                    VerifyError::Backend(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VerifyError::Backend(format!(
                "verification service returned {}",
                status
            )));
        }

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Malformed(e.to_string()))?;

        if body.reading.is_empty() {
            return Err(VerifyError::Malformed("empty reading".to_string()));
        }

        Ok(VerifiedReading {
            reading: body.reading,
            confidence: body.confidence,
        })
    }
}
