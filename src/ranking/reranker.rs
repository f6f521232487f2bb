use crate::models::{CandidateChunk, RankedChunk, RerankingResult};
use crate::ranking::boost::type_boost;
use crate::ranking::classifier::classify;
use crate::ranking::relevance::relevant_types_for;

/// Rerank candidate chunks by how well their chunk type fits the query.
///
/// Pipeline:
/// 1. Classify the query (with the optional document-type hint).
/// 2. Look up the chunk types relevant to that query type.
/// 3. For each chunk, `final_score = score × type_boost(chunk_type)`.
/// 4. Stable sort by `final_score`, highest first.
///
/// Classification runs even when `chunks` is empty so callers still get the
/// query type and relevance profile back.
pub fn rerank_by_chunk_type(
    chunks: Vec<CandidateChunk>,
    query: &str,
    document_type_hint: Option<&str>,
) -> RerankingResult {
    let query_type = classify(query, document_type_hint);
    let relevant_types = relevant_types_for(query_type);

    let mut ranked: Vec<RankedChunk> = chunks
        .into_iter()
        .map(|chunk| {
            let chunk_type = chunk.metadata.resolved_chunk_type().to_string();
            let boost = type_boost(&chunk_type, relevant_types);
            RankedChunk {
                original_score: chunk.score,
                type_boost: boost,
                final_score: chunk.score * boost,
                chunk_type,
                chunk,
            }
        })
        .collect();

    sort_by_final_score(&mut ranked);

    tracing::debug!(
        query_type = %query_type,
        candidates = ranked.len(),
        boosted = ranked.iter().filter(|c| c.type_boost > 1.0).count(),
        "Chunk-type rerank complete"
    );

    RerankingResult {
        chunks: ranked,
        boost_applied: !relevant_types.is_empty(),
        query_type,
        relevant_chunk_types: relevant_types.iter().map(|t| t.to_string()).collect(),
    }
}

/// Sort highest `final_score` first. Ties keep their existing order.
pub(crate) fn sort_by_final_score(chunks: &mut [RankedChunk]) {
    chunks.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChunkMetadata;
    use crate::ranking::classifier::QueryType;

    fn make_chunk(id: &str, score: f64, chunk_type: Option<&str>) -> CandidateChunk {
        CandidateChunk {
            id: id.to_string(),
            content: format!("content of {id}"),
            metadata: ChunkMetadata {
                chunk_type: chunk_type.map(str::to_string),
                ..Default::default()
            },
            score,
        }
    }

    #[test]
    fn test_empty_chunks_still_classifies() {
        let result = rerank_by_chunk_type(vec![], "What is the diagnosis?", None);
        assert!(result.chunks.is_empty());
        assert_eq!(result.query_type, QueryType::MedicalDiagnosis);
        assert!(result.boost_applied);
        assert!(result.relevant_chunk_types.contains(&"diagnosis".to_string()));
    }

    #[test]
    fn test_general_query_is_neutral() {
        let chunks = vec![
            make_chunk("a", 0.9, Some("diagnosis")),
            make_chunk("b", 0.4, None),
        ];
        let result = rerank_by_chunk_type(chunks, "Tell me about the weather", None);
        assert_eq!(result.query_type, QueryType::General);
        assert!(!result.boost_applied);
        assert!(result.relevant_chunk_types.is_empty());
        for c in &result.chunks {
            assert_eq!(c.type_boost, 1.0);
            assert_eq!(c.final_score, c.original_score);
        }
        assert_eq!(result.chunks[1].chunk_type, "unknown");
    }

    #[test]
    fn test_exact_match_outranks_higher_raw_score() {
        let chunks = vec![
            make_chunk("off-topic", 0.7, Some("vitals")),
            make_chunk("on-topic", 0.5, Some("obligations_clause")),
        ];
        let result =
            rerank_by_chunk_type(chunks, "What are my obligations under this lease?", None);
        // 0.5 × 2.0 = 1.0 vs 0.7 × 0.8 = 0.56
        assert_eq!(result.chunks[0].id(), "on-topic");
        assert!((result.chunks[0].final_score - 1.0).abs() < 1e-6);
        assert!((result.chunks[1].final_score - 0.56).abs() < 1e-6);
    }

    #[test]
    fn test_original_score_preserved() {
        let chunks = vec![make_chunk("x", 0.3, Some("lab_results"))];
        let result = rerank_by_chunk_type(chunks, "patient test results", None);
        assert_eq!(result.query_type, QueryType::MedicalResults);
        let c = &result.chunks[0];
        assert_eq!(c.original_score, 0.3);
        assert_eq!(c.chunk.score, 0.3);
        assert_eq!(c.type_boost, 2.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let chunks = vec![
            make_chunk("first", 0.5, Some("glossary")),
            make_chunk("second", 0.5, Some("definition")),
            make_chunk("third", 0.5, Some("overview")),
        ];
        let result = rerank_by_chunk_type(chunks, "Define escrow", None);
        let ids: Vec<&str> = result.chunks.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_partial_match_sits_between_exact_and_mismatch() {
        let chunks = vec![
            make_chunk("mismatch", 1.0, Some("vitals")),
            make_chunk("partial", 1.0, Some("treatment")),
            make_chunk("exact", 1.0, Some("treatment_plan")),
        ];
        let result = rerank_by_chunk_type(chunks, "what treatment is planned", Some("medical"));
        assert_eq!(result.query_type, QueryType::MedicalTreatment);
        let ids: Vec<&str> = result.chunks.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["exact", "partial", "mismatch"]);
    }
}
