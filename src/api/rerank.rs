use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::models::{
    ClassifyRequest, ClassifyResponse, RerankRequest, RerankResponse, SectionBoostRequest,
    SectionBoostResponse,
};
use crate::ranking::classifier::classify;
use crate::ranking::relevance::relevant_types_for;
use crate::ranking::reranker::rerank_by_chunk_type;
use crate::ranking::section::apply_section_boost;
use crate::ranking::validate::{validate_chunks, validate_query, validate_ranked, InputError};
use crate::state::AppState;

fn bad_request(e: InputError) -> (StatusCode, String) {
    tracing::warn!("Rejected request: {e}");
    (StatusCode::BAD_REQUEST, e.to_string())
}

/// POST /api/rerank - Chunk-type rerank pipeline:
///   1. Classify the query and look up its relevant chunk types
///   2. Boost each candidate by chunk-type fit and sort
///   3. Section boost (request sections, else configured defaults)
///   4. Truncate to `limit`
pub async fn rerank(
    State(state): State<AppState>,
    Json(req): Json<RerankRequest>,
) -> Result<Json<RerankResponse>, (StatusCode, String)> {
    let query = req.query.trim().to_string();
    validate_query(&query).map_err(bad_request)?;
    validate_chunks(&req.chunks, state.config.max_chunks).map_err(bad_request)?;

    let candidates = req.chunks.len();
    let mut result = rerank_by_chunk_type(req.chunks, &query, req.document_type.as_deref());

    let sections = req
        .important_sections
        .unwrap_or_else(|| state.config.default_important_sections.clone());
    let section_boost_applied = !sections.is_empty();
    if section_boost_applied {
        result.chunks = apply_section_boost(result.chunks, &sections);
    }

    if let Some(limit) = req.limit {
        result.chunks.truncate(limit);
    }

    tracing::info!(
        "Reranked {candidates} chunks as {} (boost applied: {}, sections: {})",
        result.query_type,
        result.boost_applied,
        section_boost_applied
    );

    Ok(Json(RerankResponse {
        query,
        result,
        section_boost_applied,
    }))
}

/// POST /api/classify - Query type and its relevant chunk types
pub async fn classify_query(
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, (StatusCode, String)> {
    validate_query(&req.query).map_err(bad_request)?;

    let query_type = classify(&req.query, req.document_type.as_deref());
    Ok(Json(ClassifyResponse {
        query_type,
        relevant_chunk_types: relevant_types_for(query_type)
            .iter()
            .map(|t| t.to_string())
            .collect(),
    }))
}

/// POST /api/section-boost - Section boost over already-ranked chunks
pub async fn section_boost(
    State(state): State<AppState>,
    Json(req): Json<SectionBoostRequest>,
) -> Result<Json<SectionBoostResponse>, (StatusCode, String)> {
    validate_ranked(&req.chunks, state.config.max_chunks).map_err(bad_request)?;

    let chunks = apply_section_boost(req.chunks, &req.important_sections);
    Ok(Json(SectionBoostResponse { chunks }))
}

/// GET /api/health
pub async fn health() -> &'static str {
    "ok"
}
