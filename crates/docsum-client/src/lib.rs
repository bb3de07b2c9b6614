//! # docsum-client
//!
//! HTTP client for the document-management service and the shared
//! pagination scanner.
//!
//! This crate provides:
//! - [`PaperlessClient`] — the four remote operations (fetch document,
//!   list page, post note, delete note) over bearer-token HTTP
//! - [`DocumentCrawler`] — the single pagination implementation used by
//!   both the summarization discovery scan and the cleanup crawl

pub mod paperless;
pub mod scanner;

pub use paperless::PaperlessClient;
pub use scanner::DocumentCrawler;
