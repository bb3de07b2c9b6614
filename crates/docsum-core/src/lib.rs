//! # docsum-core
//!
//! Core types, traits, and abstractions for the docsum summary
//! synchronization tools.
//!
//! This crate provides the error taxonomy, the default constants, the
//! startup configuration values, and the remote data model that the other
//! docsum crates depend on.

pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types at crate root
pub use config::{EnvConfig, SummarizerConfig};
pub use error::{Error, Result};
pub use models::{Document, Note, SearchPage};
