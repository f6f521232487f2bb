use serde::{Deserialize, Serialize};

use crate::ranking::classifier::QueryType;

/// Label used when a chunk carries no `chunkType` metadata.
pub const UNKNOWN_CHUNK_TYPE: &str = "unknown";

/// Metadata attached to a chunk by the upstream indexer.
///
/// `chunkType` and `section` are the only keys the ranking reads; any other
/// keys are kept in `extra` and serialized back out untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChunkMetadata {
    /// Chunk type label, falling back to `"unknown"` when missing or empty.
    pub fn resolved_chunk_type(&self) -> &str {
        match self.chunk_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => UNKNOWN_CHUNK_TYPE,
        }
    }
}

/// A candidate chunk as returned by hybrid search, before reranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateChunk {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: ChunkMetadata,
    pub score: f64,
}

/// A chunk after type-based reranking (and optionally section boosting)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedChunk {
    #[serde(flatten)]
    pub chunk: CandidateChunk,
    pub original_score: f64,
    pub type_boost: f64,
    pub final_score: f64,
    pub chunk_type: String,
}

impl RankedChunk {
    pub fn id(&self) -> &str {
        &self.chunk.id
    }
}

/// Output of a type-based rerank pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RerankingResult {
    pub chunks: Vec<RankedChunk>,
    pub boost_applied: bool,
    pub query_type: QueryType,
    pub relevant_chunk_types: Vec<String>,
}

/// Rerank request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RerankRequest {
    pub query: String,
    /// Coarse document classification, e.g. "legal" or "medical"
    pub document_type: Option<String>,
    #[serde(default)]
    pub chunks: Vec<CandidateChunk>,
    /// Sections to boost after the type pass. Falls back to the configured
    /// defaults when omitted.
    pub important_sections: Option<Vec<String>>,
    /// Truncate the ranked list to this many chunks
    pub limit: Option<usize>,
}

/// Rerank response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RerankResponse {
    pub query: String,
    #[serde(flatten)]
    pub result: RerankingResult,
    pub section_boost_applied: bool,
}

/// Classify request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub query: String,
    pub document_type: Option<String>,
}

/// Classify response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub query_type: QueryType,
    pub relevant_chunk_types: Vec<String>,
}

/// Section boost request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBoostRequest {
    pub chunks: Vec<RankedChunk>,
    #[serde(default)]
    pub important_sections: Vec<String>,
}

/// Section boost response
#[derive(Debug, Clone, Serialize)]
pub struct SectionBoostResponse {
    pub chunks: Vec<RankedChunk>,
}
