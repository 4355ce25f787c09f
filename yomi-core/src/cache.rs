//! Result cache (cache-aside tier)
//!
//! Texts are content-addressed: the cache key is the exact input string,
//! byte-for-byte, and entries are immutable once written. The tier is
//! best-effort — a missing or failing cache never changes the computed
//! result, only the memoization.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::segment::AnnotationResult;
use crate::tokenizer::TokenizeError;

/// Cache collaborator errors. Never propagated past the resolver.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),
    #[error("cache operation timed out")]
    Timeout,
}

/// Narrow get/set contract any cache backend implements.
///
/// Backends must be safe for concurrent use; network-backed implementations
/// are expected to bound their own calls with a timeout and report
/// [`CacheError::Timeout`] rather than block.
#[async_trait]
pub trait ResultCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<AnnotationResult>, CacheError>;
    async fn set(&self, key: &str, value: &AnnotationResult) -> Result<(), CacheError>;
}

/// Cache-aside resolution.
///
/// On hit, returns the stored result without invoking `compute`. On miss,
/// computes, stores best-effort, and returns the fresh result. Any cache
/// failure degrades to compute-only with a warning; only a tokenization
/// failure propagates.
pub async fn resolve<F, Fut>(
    cache: Option<&dyn ResultCache>,
    text: &str,
    compute: F,
) -> Result<AnnotationResult, TokenizeError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<AnnotationResult, TokenizeError>>,
{
    if let Some(cache) = cache {
        match cache.get(text).await {
            Ok(Some(hit)) => {
                debug!(text_len = text.len(), "annotation cache hit");
                return Ok(hit);
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "cache read failed, computing directly"),
        }
    }

    let result = compute().await?;

    if let Some(cache) = cache {
        if let Err(e) = cache.set(text, &result).await {
            warn!(error = %e, "cache write failed, result not memoized");
        }
    }

    Ok(result)
}

/// Bundled in-process cache backend.
///
/// Bounded: once `capacity` distinct texts are stored, further inserts are
/// dropped (eviction belongs to an external backend, not this tier).
/// Reads hand back a logical copy, never a shared-mutable entry.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, AnnotationResult>>,
    capacity: usize,
}

impl MemoryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }
}

#[async_trait]
impl ResultCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<AnnotationResult>, CacheError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &AnnotationResult) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.capacity && !entries.contains_key(key) {
            debug!(capacity = self.capacity, "memory cache full, entry dropped");
            return Ok(());
        }
        entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}
