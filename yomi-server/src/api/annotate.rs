//! Annotation API endpoints
//!
//! **Request:** `{"text": "日本語を学習します"}`
//!
//! `POST /annotate` returns the full result (flat reading, aggregate
//! confidence, per-segment detail); `POST /annotate/html` returns the same
//! annotation rendered as inline ruby markup.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use yomi_core::format;
use yomi_core::Segment;

use crate::{ApiError, ApiResult, AppState};

/// Response payload for POST /annotate
#[derive(Debug, Serialize)]
pub struct AnnotateResponse {
    /// Original input text
    pub text: String,
    /// Fully-kana reading of the whole text
    pub reading: String,
    /// Aggregate confidence over all segments
    pub confidence: f64,
    /// Per-segment annotation detail
    pub segments: Vec<Segment>,
}

/// Response payload for POST /annotate/html
#[derive(Debug, Serialize)]
pub struct AnnotateHtmlResponse {
    /// Original input text
    pub text: String,
    /// Inline ruby markup
    pub html: String,
}

/// Pull the required `text` field out of a loosely-parsed body.
///
/// Parsed by hand rather than with a derive struct so a missing field is a
/// 400 with a clear message, not an extractor rejection.
fn extract_text(body: &Value) -> ApiResult<&str> {
    body.get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("Missing text field".to_string()))
}

/// POST /annotate
///
/// **Errors:**
/// - 400 Bad Request: body has no string `text` field
/// - 503 Service Unavailable: segmentation engine failure
pub async fn annotate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<AnnotateResponse>> {
    let text = extract_text(&body)?;

    let result = state.annotator.annotate(text).await?;

    info!(
        text_len = text.len(),
        segments = result.segments.len(),
        confidence = result.aggregate_confidence,
        "annotated text"
    );

    Ok(Json(AnnotateResponse {
        reading: format::reading_string(&result),
        confidence: result.aggregate_confidence,
        text: result.text,
        segments: result.segments,
    }))
}

/// POST /annotate/html
///
/// Same input contract as /annotate; the body of the response carries the
/// annotation as `<ruby>` markup instead of structured segments.
pub async fn annotate_html(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<AnnotateHtmlResponse>> {
    let text = extract_text(&body)?;

    let result = state.annotator.annotate(text).await?;

    Ok(Json(AnnotateHtmlResponse {
        html: format::ruby_markup(&result),
        text: result.text,
    }))
}
