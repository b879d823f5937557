use std::time::Instant;

use gloss_core::{AnnotationQuery, GlossEngine};
use gloss_types::{AnnotateRequest, AnnotateResponse};

/// Answer one raw request line. Failures become error responses; the caller
/// keeps serving.
pub fn handle_line(engine: &GlossEngine, line: &[u8]) -> AnnotateResponse {
    let request = match AnnotateRequest::from_slice(line) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected request: {}", e);
            return AnnotateResponse::error(e);
        }
    };

    annotate(engine, request.into())
}

pub fn annotate(engine: &GlossEngine, query: AnnotationQuery) -> AnnotateResponse {
    let start = Instant::now();
    match engine.annotate(&query) {
        Ok(records) => {
            tracing::debug!(
                "Annotated {} chars ({} -> {}) with {} glosses in {:?}",
                query.text.chars().count(),
                query.source_lang,
                query.target_lang,
                records.len(),
                start.elapsed()
            );
            AnnotateResponse::results(records)
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            AnnotateResponse::error(e)
        }
    }
}
