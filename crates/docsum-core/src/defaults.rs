//! Centralized default constants for the docsum system.
//!
//! **This module is the single source of truth** for all shared default
//! values. The other crates and the binaries reference these constants
//! instead of defining their own magic numbers.

// =============================================================================
// SUMMARIZER
// =============================================================================

/// Default generation model name (Ollama).
pub const MODEL_NAME: &str = "llama3.2";

/// Default model context length. Stored in the active configuration and
/// serialized into the provenance block, but never sent with generation
/// requests.
pub const CONTEXT_LENGTH: u32 = 8096;

/// Default prompt prefix prepended to the document text.
pub const SUMMARY_PROMPT: &str = "Summarize the given text: ";

/// Marker substring identifying a note as AI-generated.
pub const SUMMARY_MARKER: &str = "AI_SUMMARY";

/// Suffix of the optional per-document plain-text output file.
pub const SUMMARY_FILE_SUFFIX: &str = "_summary.txt";

// =============================================================================
// INFERENCE
// =============================================================================

/// Default Ollama base URL.
pub const OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Timeout for the inference health check in seconds.
pub const HEALTH_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// DOCUMENT SERVICE
// =============================================================================

/// Query ordering for the crawl seed: newest documents first, so an
/// interrupted run does not re-scan already-summarized older documents
/// ahead of newer ones.
pub const DOCUMENTS_ORDERING: &str = "-id";

/// Connect timeout for document-service requests in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Per-page request timeout for the all-mode cleanup crawl in seconds.
pub const CLEANUP_PAGE_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Environment variable holding the document-service API token (required).
pub const ENV_PAPERLESS_TOKEN: &str = "PAPERLESS_TOKEN";

/// Environment variable holding the document-service base URL (required).
pub const ENV_PAPERLESS_URL: &str = "PAPERLESS_URL";

/// Environment variable enabling local plain-text output ("1" to enable).
pub const ENV_OUTPUT_TXT: &str = "OUTPUT_TXT";

/// Environment variable for the local output directory.
pub const ENV_OUTPUT_PATH: &str = "OUTPUT_PATH";

/// Environment variable overriding the generation model.
pub const ENV_MODEL_NAME: &str = "MODEL_NAME";

/// Environment variable overriding the stored context length.
pub const ENV_CONTEXT_LENGTH: &str = "CONTEXT_LENGTH";

/// Environment variable overriding the prompt prefix.
pub const ENV_SUMMARY_PROMPT: &str = "SUMMARY_PROMPT";

/// Environment variable overriding the marker substring.
pub const ENV_SUMMARY_MARKER: &str = "SUMMARY_MARKER";

/// Environment variable overriding the Ollama base URL.
pub const ENV_OLLAMA_BASE: &str = "OLLAMA_BASE";
