//! Ollama generation backend implementation.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use docsum_core::{defaults, Error, Result};

use crate::streaming::{parse_ndjson_stream, TokenStream};

/// Default Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = defaults::OLLAMA_URL;

/// Ollama generation backend.
pub struct OllamaBackend {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    /// Create a new Ollama backend with custom configuration.
    pub fn with_config(base_url: String, model: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "Initializing Ollama backend: url={}, model={}",
            base_url, model
        );

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Create from environment variables with the configured model.
    pub fn from_env(model: String) -> Self {
        let base_url = std::env::var(defaults::ENV_OLLAMA_BASE)
            .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        Self::with_config(base_url, model)
    }

    /// Get the generation model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the generation prompt: configured prefix and document text,
    /// single space separator.
    pub fn build_prompt(prefix: &str, text: &str) -> String {
        format!("{} {}", prefix, text)
    }

    /// Start a streaming generation and return the fragment stream.
    ///
    /// The context-length setting is deliberately not sent with the
    /// request; document text goes to the model uncapped, and any
    /// model-side truncation is invisible at this layer.
    #[instrument(skip(self, prompt), fields(subsystem = "inference", component = "ollama", op = "generate", model = %self.model, prompt_len = prompt.len()))]
    pub async fn generate_stream(&self, prompt: &str) -> Result<TokenStream> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: true,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        debug!("Streaming generation started");
        Ok(parse_ndjson_stream(response.bytes_stream()))
    }

    /// Check whether the model server is reachable.
    pub async fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(Duration::from_secs(defaults::HEALTH_TIMEOUT_SECS))
            .send()
            .await;

        match response {
            Ok(resp) => {
                if resp.status().is_success() {
                    info!("Ollama health check passed");
                    Ok(true)
                } else {
                    warn!("Ollama health check failed: {}", resp.status());
                    Ok(false)
                }
            }
            Err(e) => {
                warn!("Ollama health check error: {}", e);
                Ok(false)
            }
        }
    }
}

/// Request payload for the Ollama `/api/generate` endpoint.
#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}
