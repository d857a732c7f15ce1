//! # sitechat core
//!
//! Runtime-free building blocks of the sitechat answer pipeline: data
//! model, query expansion, context assembly, prompt construction, and the
//! capability traits the orchestrator is wired with.
//!
//! This crate contains no tokio, sqlx, HTTP client, or filesystem
//! dependencies. Timeouts, parallelism and concrete collaborators live in
//! the `sitechat` app crate.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Passages, history entries, answer results |
//! | [`error`] | Caller input errors |
//! | [`expand`] | Query expansion (RAG fusion variants) |
//! | [`context`] | Dedup, truncation and rendering of retrieved passages |
//! | [`web`] | Fallback search contract and web-context assembly |
//! | [`prompt`] | History flattening and prompt templates |
//! | [`generate`] | Answer-generation contract |
//! | [`mmr`] | Maximal marginal relevance reranking |
//! | [`chunk`] | Paragraph-boundary text chunker |
//! | [`embedding`] | Vector helpers |
//! | [`store`] | Document store contract and in-memory backend |

pub mod chunk;
pub mod context;
pub mod embedding;
pub mod error;
pub mod expand;
pub mod generate;
pub mod mmr;
pub mod models;
pub mod prompt;
pub mod store;
pub mod web;

pub use error::InputError;
pub use generate::Generator;
pub use models::{AnswerResult, DetailLevel, HistoryEntry, RetrievedPassage, Role, SourceFlag};
pub use store::DocumentStore;
pub use web::{SearchProvider, WebResult};
