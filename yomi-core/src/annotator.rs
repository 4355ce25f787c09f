//! Annotation orchestrator
//!
//! Single public entry point composing the three tiers: tokenizer adapter
//! (always), result cache (optional, best-effort), and verification
//! (optional, for low-confidence segments). Collaborators are injected at
//! construction; the orchestrator itself is stateless across calls.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{self, ResultCache};
use crate::confidence::LOW_CONFIDENCE;
use crate::normalize::kata_to_hira;
use crate::script;
use crate::segment::{mean_confidence, AnnotationResult, Source};
use crate::tokenizer::{TokenizeError, TokenizerAdapter};
use crate::verify::ReadingVerifier;

/// The annotation service core.
///
/// Constructed once per process and shared; `annotate` is safe to call
/// concurrently as long as the collaborators are.
pub struct Annotator {
    adapter: TokenizerAdapter,
    cache: Option<Arc<dyn ResultCache>>,
    verifier: Option<Arc<dyn ReadingVerifier>>,
}

impl Annotator {
    pub fn new(adapter: TokenizerAdapter) -> Self {
        Self {
            adapter,
            cache: None,
            verifier: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResultCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn ReadingVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Annotate `text` with readings and per-segment confidence.
    ///
    /// Empty input is a defined terminal case (zero segments, aggregate 0),
    /// not an error. The only error this returns is
    /// [`TokenizeError::Unavailable`]; cache and verification failures
    /// degrade locally.
    pub async fn annotate(&self, text: &str) -> Result<AnnotationResult, TokenizeError> {
        if text.is_empty() {
            return Ok(AnnotationResult::empty(text));
        }

        let mut result = cache::resolve(self.cache.as_deref(), text, || async {
            let segments = self.adapter.segment(text)?;
            Ok(AnnotationResult::new(text, segments))
        })
        .await?;

        self.verify_low_confidence(&mut result).await;

        Ok(result)
    }

    /// Re-resolve low-confidence tokenizer segments through the verification
    /// collaborator, if one is configured.
    ///
    /// Substitutions are positional; segment order is never affected. A
    /// verification failure leaves the original segment untouched.
    async fn verify_low_confidence(&self, result: &mut AnnotationResult) {
        let Some(verifier) = &self.verifier else {
            return;
        };

        let mut substituted = 0usize;
        for segment in &mut result.segments {
            if segment.confidence >= LOW_CONFIDENCE || segment.source != Source::Tokenizer {
                continue;
            }
            // Only kanji spans can gain a reading; kana and Latin segments
            // stay as the tokenizer left them.
            if !script::contains_kanji(&segment.surface) {
                continue;
            }

            match verifier.verify(&segment.surface).await {
                Ok(verified) => {
                    debug!(surface = %segment.surface, confidence = verified.confidence,
                        "segment re-resolved by verifier");
                    segment.reading = Some(kata_to_hira(&verified.reading));
                    segment.confidence = verified.confidence.clamp(0.0, 1.0);
                    segment.source = Source::Verification;
                    substituted += 1;
                }
                Err(e) => {
                    warn!(surface = %segment.surface, error = %e,
                        "verification failed, keeping tokenizer segment");
                }
            }
        }

        if substituted > 0 {
            result.aggregate_confidence = mean_confidence(&result.segments);
            info!(substituted, "verification tier updated segments");
        }
    }
}
