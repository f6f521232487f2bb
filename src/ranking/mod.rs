pub mod boost;
pub mod classifier;
pub mod relevance;
pub mod reranker;
pub mod section;
pub mod validate;
