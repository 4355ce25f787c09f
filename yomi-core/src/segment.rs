//! Annotation data model
//!
//! A [`Segment`] is one lexical unit of the input with its optional hiragana
//! reading, a confidence in [0, 1], and a provenance tag. An
//! [`AnnotationResult`] is the ordered, gap-free sequence of segments covering
//! one input text; once assembled it is never mutated in place.

use serde::{Deserialize, Serialize};

/// Where a segment's annotation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Real-time segmentation engine
    Tokenizer,
    /// Served from the result cache
    Cache,
    /// Re-resolved by the verification tier
    Verification,
    /// Hand-curated override
    Manual,
}

/// One lexical unit of annotated text.
///
/// `reading` is `None` when the surface needs no reading (pure kana, Latin,
/// punctuation) or when none could be determined; that is distinct from a
/// reading that happens to equal the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Literal text span, non-empty
    pub surface: String,
    /// Canonical hiragana reading, if one is needed and known
    pub reading: Option<String>,
    /// Certainty of this annotation, in [0, 1]
    pub confidence: f64,
    /// Provenance tag
    pub source: Source,
}

/// The annotation of one input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationResult {
    /// Original input, unmodified
    pub text: String,
    /// Segments in left-to-right textual order, covering the input
    pub segments: Vec<Segment>,
    /// Arithmetic mean of segment confidences; 0 when there are no segments
    pub aggregate_confidence: f64,
}

impl AnnotationResult {
    /// Assemble a result, computing the aggregate confidence
    pub fn new(text: impl Into<String>, segments: Vec<Segment>) -> Self {
        let aggregate_confidence = mean_confidence(&segments);
        Self {
            text: text.into(),
            segments,
            aggregate_confidence,
        }
    }

    /// The empty-input terminal case: no segments, aggregate 0
    pub fn empty(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }
}

/// Mean of segment confidences; 0 for an empty slice
pub(crate) fn mean_confidence(segments: &[Segment]) -> f64 {
    if segments.is_empty() {
        return 0.0;
    }
    segments.iter().map(|s| s.confidence).sum::<f64>() / segments.len() as f64
}
