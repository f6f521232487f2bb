use crate::models::RankedChunk;
use crate::ranking::reranker::sort_by_final_score;

/// Multiplier for chunks that belong to an important section.
pub const SECTION_BOOST: f64 = 1.3;

/// Boost chunks whose `metadata.section` contains one of `important_sections`
/// (case-insensitive substring), then re-sort by `final_score`.
///
/// Meant to run after [`rerank_by_chunk_type`](crate::ranking::reranker::rerank_by_chunk_type):
/// it multiplies the same `final_score`. An empty list returns the input
/// untouched and in the same order. An empty entry matches every section.
pub fn apply_section_boost(
    mut chunks: Vec<RankedChunk>,
    important_sections: &[String],
) -> Vec<RankedChunk> {
    if important_sections.is_empty() {
        return chunks;
    }
    let needles: Vec<String> = important_sections
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut boosted = 0usize;
    for chunk in chunks.iter_mut() {
        let section = chunk
            .chunk
            .metadata
            .section
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        if needles.iter().any(|n| section.contains(n.as_str())) {
            chunk.final_score *= SECTION_BOOST;
            boosted += 1;
        }
    }

    sort_by_final_score(&mut chunks);

    tracing::debug!(
        sections = needles.len(),
        boosted,
        total = chunks.len(),
        "Section boost applied"
    );

    chunks
}
