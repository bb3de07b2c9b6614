//! Structured logging schema and field name constants for docsum.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Per-document/per-note failure, crawl aborted, requires operator attention |
//! | WARN  | Recoverable issue, crawl or request skipped |
//! | INFO  | Lifecycle events (startup, run summary), operation completions |
//! | DEBUG | Decision points, skipped malformed entries, config choices |
//! | TRACE | Per-fragment streaming data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "client", "scanner", "inference", "writer", "cleanup"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "paperless", "ollama", "crawler"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "fetch_document", "post_note", "generate", "scan"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Document id being operated on.
pub const DOCUMENT_ID: &str = "document_id";

/// Note id being operated on.
pub const NOTE_ID: &str = "note_id";

/// Request or pagination URL involved in the event.
pub const URL: &str = "url";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by a scan or page.
pub const RESULT_COUNT: &str = "result_count";

/// Byte length of a prompt sent to the model.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for generation.
pub const MODEL: &str = "model";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Slow operation threshold exceeded.
pub const SLOW: &str = "slow";
