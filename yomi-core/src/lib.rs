//! # Yomi Core Library
//!
//! Annotation core for the furigana service: classifies each lexical unit of a
//! Japanese text by script, attaches a canonical hiragana reading where one is
//! needed, and scores how certain the annotation is.
//!
//! The pipeline is tiered:
//! 1. Tokenizer backend (real-time segmentation with readings)
//! 2. Result cache (cache-aside, best-effort)
//! 3. Verification collaborator (re-resolves low-confidence segments)
//!
//! All collaborators are injected into [`Annotator`]; the core holds no global
//! state and each `annotate` call is an independent transaction.

pub mod annotator;
pub mod cache;
pub mod confidence;
pub mod format;
pub mod normalize;
pub mod script;
pub mod segment;
pub mod tokenizer;
pub mod verify;

pub use annotator::Annotator;
pub use cache::{CacheError, MemoryCache, ResultCache};
pub use confidence::{ConfidencePolicy, LOW_CONFIDENCE};
pub use script::ScriptKind;
pub use segment::{AnnotationResult, Segment, Source};
pub use tokenizer::{RawToken, ReadingTokenizer, TokenizeError, TokenizerAdapter};
pub use verify::{ReadingVerifier, VerifiedReading, VerifyError};
