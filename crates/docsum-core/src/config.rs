//! Startup configuration resolved once from the process environment.
//!
//! Two immutable values are constructed at startup and passed explicitly to
//! every component that needs them:
//! - [`EnvConfig`] — document-service credentials and local output options;
//!   missing or malformed required values are fatal before any network
//!   activity.
//! - [`SummarizerConfig`] — generation parameters with defaults; also the
//!   value serialized into every summary note's provenance block.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::defaults;
use crate::error::{Error, Result};

/// Document-service connection and local output configuration.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Static bearer token for the document service.
    pub token: String,
    /// Base URL of the document service API, without trailing slash.
    pub base_url: String,
    /// Whether to write each summary to a local plain-text file.
    pub output_txt: bool,
    /// Directory for local output files. Empty means the current directory.
    pub output_path: PathBuf,
}

impl EnvConfig {
    /// Read and validate the environment. Fails with [`Error::Config`]
    /// before any network activity when a required value is missing or the
    /// base URL is malformed.
    pub fn from_env() -> Result<Self> {
        let token = env::var(defaults::ENV_PAPERLESS_TOKEN)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::Config(format!("{} is not set", defaults::ENV_PAPERLESS_TOKEN))
            })?;

        let base_url = env::var(defaults::ENV_PAPERLESS_URL)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", defaults::ENV_PAPERLESS_URL)))?;

        let output_txt = env::var(defaults::ENV_OUTPUT_TXT)
            .map(|v| v == "1")
            .unwrap_or(false);

        let output_path = PathBuf::from(env::var(defaults::ENV_OUTPUT_PATH).unwrap_or_default());

        let config = Self {
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            output_txt,
            output_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "{} must start with http:// or https://, got: {}",
                defaults::ENV_PAPERLESS_URL,
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Generation parameters, immutable after startup.
///
/// The serialized form of this value is embedded in every summary note
/// after the `Model-Configuration:` label, so a note records which model
/// and prompt produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizerConfig {
    /// Generation model identifier.
    pub model: String,
    /// Prompt prefix prepended to the document text.
    pub prompt: String,
    /// Target context length. Stored and reported, not enforced upstream.
    pub context_length: u32,
    /// Marker substring identifying summary notes.
    pub marker: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: defaults::MODEL_NAME.to_string(),
            prompt: defaults::SUMMARY_PROMPT.to_string(),
            context_length: defaults::CONTEXT_LENGTH,
            marker: defaults::SUMMARY_MARKER.to_string(),
        }
    }
}

impl SummarizerConfig {
    /// Resolve from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let model =
            env::var(defaults::ENV_MODEL_NAME).unwrap_or_else(|_| defaults::MODEL_NAME.to_string());
        let prompt = env::var(defaults::ENV_SUMMARY_PROMPT)
            .unwrap_or_else(|_| defaults::SUMMARY_PROMPT.to_string());
        let context_length = env::var(defaults::ENV_CONTEXT_LENGTH)
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults::CONTEXT_LENGTH);
        let marker = env::var(defaults::ENV_SUMMARY_MARKER)
            .unwrap_or_else(|_| defaults::SUMMARY_MARKER.to_string());

        let config = Self {
            model,
            prompt,
            context_length,
            marker,
        };
        info!(
            model = %config.model,
            context_length = config.context_length,
            marker = %config.marker,
            "Summarizer configuration resolved"
        );
        config
    }
}
