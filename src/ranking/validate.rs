use std::collections::HashSet;

use crate::models::{CandidateChunk, RankedChunk};

/// Largest accepted score. Far enough below `f64::MAX` that the strongest
/// type boost and repeated section boosts stay finite.
pub const MAX_SCORE: f64 = 1.0e300;

/// Input rejected before it reaches the ranking functions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("Query is required")]
    EmptyQuery,
    #[error("Too many chunks: {count} (max {max})")]
    TooManyChunks { count: usize, max: usize },
    #[error("Duplicate chunk id: {0}")]
    DuplicateId(String),
    #[error("Chunk {id} has a non-finite score")]
    NonFiniteScore { id: String },
    #[error("Chunk {id} has a negative score")]
    NegativeScore { id: String },
    #[error("Chunk {id} has a score above {max:e}")]
    ScoreTooLarge { id: String, max: f64 },
}

pub fn validate_query(query: &str) -> Result<(), InputError> {
    if query.trim().is_empty() {
        return Err(InputError::EmptyQuery);
    }
    Ok(())
}

/// Check candidate chunks: bounded count, unique ids, finite scores in
/// `0.0..=MAX_SCORE`.
pub fn validate_chunks(chunks: &[CandidateChunk], max_chunks: usize) -> Result<(), InputError> {
    check_scores(chunks.iter().map(|c| (c.id.as_str(), c.score)), chunks.len(), max_chunks)
}

/// Same checks for already-ranked chunks, applied to `final_score`.
pub fn validate_ranked(chunks: &[RankedChunk], max_chunks: usize) -> Result<(), InputError> {
    check_scores(
        chunks.iter().map(|c| (c.id(), c.final_score)),
        chunks.len(),
        max_chunks,
    )
}

fn check_scores<'a>(
    scores: impl Iterator<Item = (&'a str, f64)>,
    count: usize,
    max_chunks: usize,
) -> Result<(), InputError> {
    if count > max_chunks {
        return Err(InputError::TooManyChunks {
            count,
            max: max_chunks,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    for (id, score) in scores {
        if !seen.insert(id) {
            return Err(InputError::DuplicateId(id.to_string()));
        }
        if !score.is_finite() {
            return Err(InputError::NonFiniteScore { id: id.to_string() });
        }
        if score < 0.0 {
            return Err(InputError::NegativeScore { id: id.to_string() });
        }
        if score > MAX_SCORE {
            return Err(InputError::ScoreTooLarge {
                id: id.to_string(),
                max: MAX_SCORE,
            });
        }
    }
    Ok(())
}
