//! # docsum-inference
//!
//! Streaming generation backend for docsum.
//!
//! This crate provides:
//! - The Ollama generation backend (`/api/generate`, streaming mode)
//! - NDJSON token-stream parsing
//! - Stream folding with an optional stdout progress echo
//!
//! The generation contract is a lazy, finite, non-restartable sequence of
//! text fragments; the consumer folds it into the final summary in arrival
//! order.

pub mod ollama;
pub mod streaming;

pub use ollama::OllamaBackend;
pub use streaming::{collect_stream, StreamEcho, TokenStream};
