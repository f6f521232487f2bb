pub mod rerank;
