//! # chunk-rerank
//!
//! Query-aware reranking of retrieved document chunks. Candidates come from
//! an upstream hybrid search step; this crate reorders them by how well each
//! chunk's type fits the kind of question being asked, optionally favouring
//! chunks from caller-designated sections.
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────────────┐     ┌──────────────────────┐
//!        │    User Query    │     │  Candidate Chunks    │
//!        │ (+ doc-type hint)│     │ (score, chunkType,   │
//!        └────────┬─────────┘     │  section)            │
//!                 │               └──────────┬───────────┘
//!                 ▼                          │
//!      ┌─────────────────────┐               │
//!      │  Query Classifier   │               │
//!      │ first admitting gate│               │
//!      │ → generic → GENERAL │               │
//!      └──────────┬──────────┘               │
//!                 │ QueryType                │
//!                 ▼                          │
//!      ┌─────────────────────┐               │
//!      │   Relevance Table   │               │
//!      └──────────┬──────────┘               │
//!                 │ relevant chunk types     │
//!                 └────────────┬─────────────┘
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │   Type Boost + Sort   │
//!                  │  exact:    ×2.0       │
//!                  │  partial:  ×1.5       │
//!                  │  mismatch: ×0.8       │
//!                  │  no profile: ×1.0     │
//!                  └───────────┬───────────┘
//!                              │
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │ Section Boost (opt.)  │
//!                  │  match: ×1.3, re-sort │
//!                  └───────────┬───────────┘
//!                              │
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │    Ranked Chunks      │
//!                  └───────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the HTTP sidecar
//! - [`models`] - Chunk, ranked chunk, and request/response types
//! - [`ranking::classifier`] - Ordered rule groups mapping a query to a `QueryType`
//! - [`ranking::relevance`] - Static table of on-topic chunk types per query type
//! - [`ranking::boost`] - Three-tier chunk-type boost factor
//! - [`ranking::reranker`] - Classify, boost, and sort candidate chunks
//! - [`ranking::section`] - Optional section-name boost pass
//! - [`ranking::validate`] - Boundary checks on queries and chunk lists
//! - [`api`] - Axum HTTP handlers exposing classify, rerank, and section boost
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod models;
pub mod ranking;
pub mod state;
