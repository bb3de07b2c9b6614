//! # docsum-cli
//!
//! Orchestration for the two docsum entry points:
//! - `docsum` — discover unsummarized documents, generate summaries, and
//!   write them back as notes ([`writer`])
//! - `docsum-cleanup` — purge previously written summary notes, across
//!   every document or for a single one ([`cleanup`])

pub mod cleanup;
pub mod writer;

pub use cleanup::{CleanupTarget, NoteCleanup};
pub use writer::{RunStats, SummaryWriter};

/// Initialize console tracing for the binaries.
///
/// `RUST_LOG` controls filtering (default `info`); `LOG_FORMAT=json`
/// switches to JSON output.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
