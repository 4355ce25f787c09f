//! Tokenizer boundary and adapter
//!
//! The segmentation engine itself (dictionary lookup, lattice search) is an
//! external collaborator behind [`ReadingTokenizer`]. The adapter turns its
//! raw tokens into [`Segment`]s: normalizes readings, applies the script
//! forcing rule, and scores each token with the configured confidence policy.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::confidence::ConfidencePolicy;
use crate::normalize::normalize_reading;
use crate::script::{self, ScriptKind};
use crate::segment::{Segment, Source};

/// Tokenizer boundary errors
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The engine could not be reached or initialized. Fatal for the current
    /// request; an empty result must never be confused with this.
    #[error("tokenizer unavailable: {0}")]
    Unavailable(String),
}

/// One raw token as the segmentation engine reports it.
///
/// `reading` is katakana (or whatever the engine's dictionary carries);
/// `cost` is the engine's path cost when the backend exposes one.
#[derive(Debug, Clone)]
pub struct RawToken {
    pub surface: String,
    pub reading: Option<String>,
    pub cost: Option<i64>,
}

/// The external segmentation engine, consumed as a black box.
///
/// Implementations must be deterministic for identical input and safe to
/// share across concurrent requests (read-only dictionary state).
pub trait ReadingTokenizer: Send + Sync {
    /// Segment `text` into raw tokens in left-to-right order
    fn segment_raw(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError>;
}

/// Wraps a [`ReadingTokenizer`] and produces scored, normalized segments.
///
/// The confidence policy is fixed at construction to match the configured
/// backend (cost-based engines report costs; others only report whether a
/// reading was found).
#[derive(Clone)]
pub struct TokenizerAdapter {
    backend: Arc<dyn ReadingTokenizer>,
    policy: ConfidencePolicy,
}

impl TokenizerAdapter {
    pub fn new(backend: Arc<dyn ReadingTokenizer>, policy: ConfidencePolicy) -> Self {
        Self { backend, policy }
    }

    /// Segment `text` into annotated segments.
    ///
    /// Per token: blank surfaces are skipped, the reading is converted to
    /// hiragana, non-kanji surfaces have their reading forced absent (a kana
    /// token is never re-annotated with itself), and confidence comes from
    /// the configured policy.
    pub fn segment(&self, text: &str) -> Result<Vec<Segment>, TokenizeError> {
        let raw = self.backend.segment_raw(text)?;
        let mut segments = Vec::with_capacity(raw.len());

        for token in raw {
            if token.surface.trim().is_empty() {
                continue;
            }

            let script = script::classify(&token.surface);
            let has_reading = token.reading.is_some();
            let reading = if script == ScriptKind::Kanji {
                normalize_reading(token.reading.as_deref())
            } else {
                None
            };
            let confidence = self.policy.score(token.cost, has_reading, script);

            segments.push(Segment {
                surface: token.surface,
                reading,
                confidence,
                source: Source::Tokenizer,
            });
        }

        debug!(text_len = text.len(), segments = segments.len(), "segmented text");
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-script backend emitting a canned token stream
    struct FixtureTokenizer {
        tokens: Vec<RawToken>,
    }

    impl ReadingTokenizer for FixtureTokenizer {
        fn segment_raw(&self, _text: &str) -> Result<Vec<RawToken>, TokenizeError> {
            Ok(self.tokens.clone())
        }
    }

    struct BrokenTokenizer;

    impl ReadingTokenizer for BrokenTokenizer {
        fn segment_raw(&self, _text: &str) -> Result<Vec<RawToken>, TokenizeError> {
            Err(TokenizeError::Unavailable("engine not initialized".into()))
        }
    }

    fn tok(surface: &str, reading: Option<&str>, cost: Option<i64>) -> RawToken {
        RawToken {
            surface: surface.to_string(),
            reading: reading.map(str::to_string),
            cost,
        }
    }

    fn adapter(tokens: Vec<RawToken>, policy: ConfidencePolicy) -> TokenizerAdapter {
        TokenizerAdapter::new(Arc::new(FixtureTokenizer { tokens }), policy)
    }

    #[test]
    fn normalizes_katakana_reading_to_hiragana() {
        let a = adapter(
            vec![tok("日本語", Some("ニホンゴ"), Some(300))],
            ConfidencePolicy::CostBased,
        );
        let segs = a.segment("日本語").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].reading.as_deref(), Some("にほんご"));
        assert!(segs[0].confidence >= 0.9);
        assert_eq!(segs[0].source, Source::Tokenizer);
    }

    #[test]
    fn forces_reading_absent_for_non_kanji_surfaces() {
        // The engine annotating a katakana word with its own surface
        let a = adapter(
            vec![tok("カタカナ", Some("カタカナ"), Some(200))],
            ConfidencePolicy::CostBased,
        );
        let segs = a.segment("カタカナ").unwrap();
        assert_eq!(segs[0].reading, None);

        let a = adapter(
            vec![tok("を", Some("ヲ"), Some(100))],
            ConfidencePolicy::CostBased,
        );
        assert_eq!(a.segment("を").unwrap()[0].reading, None);
    }

    #[test]
    fn skips_blank_surfaces() {
        let a = adapter(
            vec![
                tok("", None, None),
                tok("  ", None, None),
                tok("山", Some("ヤマ"), Some(400)),
            ],
            ConfidencePolicy::CostBased,
        );
        let segs = a.segment("山").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].surface, "山");
    }

    #[test]
    fn presence_policy_flags_missing_kanji_reading() {
        let a = adapter(
            vec![tok("魑魅", None, None), tok("です", None, None)],
            ConfidencePolicy::PresenceBased,
        );
        let segs = a.segment("魑魅です").unwrap();
        assert_eq!(segs[0].confidence, 0.60);
        assert_eq!(segs[0].reading, None);
        assert_eq!(segs[1].confidence, 0.95);
    }

    #[test]
    fn engine_failure_surfaces_as_unavailable() {
        let a = TokenizerAdapter::new(Arc::new(BrokenTokenizer), ConfidencePolicy::CostBased);
        let err = a.segment("日本語").unwrap_err();
        assert!(matches!(err, TokenizeError::Unavailable(_)));
    }

    #[test]
    fn empty_token_stream_is_empty_result_not_error() {
        let a = adapter(vec![], ConfidencePolicy::CostBased);
        assert!(a.segment("").unwrap().is_empty());
    }
}
