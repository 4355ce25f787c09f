//! Verification collaborator contract (fallback tier)
//!
//! Low-confidence segments can be re-resolved by an external service (an LLM
//! backend in the deployed system). The tier is optional and additive: the
//! pipeline produces a valid result without it, and any failure here is
//! absorbed by the orchestrator.

use async_trait::async_trait;
use thiserror::Error;

/// Verification collaborator errors. Never propagated past the orchestrator.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("verification backend error: {0}")]
    Backend(String),
    #[error("verification response malformed: {0}")]
    Malformed(String),
    #[error("verification timed out")]
    Timeout,
}

/// A re-resolved reading for one surface
#[derive(Debug, Clone)]
pub struct VerifiedReading {
    /// Reading as reported by the backend (katakana or hiragana)
    pub reading: String,
    /// Backend-reported confidence; the orchestrator clamps it into [0, 1]
    pub confidence: f64,
}

/// Re-resolves a single surface's reading.
///
/// Implementations bound their calls with a timeout and report
/// [`VerifyError::Timeout`] rather than block the orchestrator.
#[async_trait]
pub trait ReadingVerifier: Send + Sync {
    async fn verify(&self, surface: &str) -> Result<VerifiedReading, VerifyError>;
}
