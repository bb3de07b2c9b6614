//! Main orchestration loop: discover unsummarized documents, generate a
//! summary for each, and write it back as a note.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use docsum_client::{DocumentCrawler, PaperlessClient};
use docsum_core::{defaults, EnvConfig, Error, Result, SummarizerConfig};
use docsum_inference::{collect_stream, OllamaBackend, StreamEcho};

/// Outcome counts of one summarization run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Unsummarized documents discovered by the scan.
    pub scanned: usize,
    /// Documents whose summary note was posted.
    pub summarized: usize,
    /// Documents skipped after a per-document failure.
    pub failed: usize,
}

/// Compose the note body written back to the document service.
///
/// The body ends with the bare marker on its own trailing line, which is
/// what the scan's substring classification later recognizes, and embeds
/// the active configuration after the `Model-Configuration:` label so a
/// note records which model and prompt produced it.
pub fn compose_note_body(summary: &str, config: &SummarizerConfig) -> Result<String> {
    let config_json = serde_json::to_string(config)?;
    Ok(format!(
        "{}\n\nModel-Configuration: {}\n{}",
        summary, config_json, config.marker
    ))
}

/// Write the plain summary text (not the composite note body) to
/// `<output_dir>/<document_id>_summary.txt`, creating the directory and
/// overwriting any existing file.
pub fn write_summary_file(output_dir: &Path, document_id: i64, summary: &str) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    let file_path = output_dir.join(format!("{}{}", document_id, defaults::SUMMARY_FILE_SUFFIX));
    fs::write(&file_path, summary)?;
    info!(document_id, path = %file_path.display(), "Summary file written");
    Ok(())
}

/// Orchestrates the summarization loop, strictly sequential in crawl
/// order, with per-document error isolation.
pub struct SummaryWriter<'a> {
    client: &'a PaperlessClient,
    backend: &'a OllamaBackend,
    env: &'a EnvConfig,
    config: &'a SummarizerConfig,
    echo: StreamEcho,
}

impl<'a> SummaryWriter<'a> {
    pub fn new(
        client: &'a PaperlessClient,
        backend: &'a OllamaBackend,
        env: &'a EnvConfig,
        config: &'a SummarizerConfig,
    ) -> Self {
        Self {
            client,
            backend,
            env,
            config,
            echo: StreamEcho::Silent,
        }
    }

    /// Mirror generation fragments to stdout as they arrive.
    pub fn with_echo(mut self, echo: StreamEcho) -> Self {
        self.echo = echo;
        self
    }

    /// Run discovery and the summarization loop.
    ///
    /// A page failure during discovery aborts the run; a failure while
    /// summarizing one document is logged with its id and the loop
    /// continues with the next one.
    pub async fn run(&self) -> Result<RunStats> {
        let ids = DocumentCrawler::new(self.client)
            .unsummarized_ids(&self.config.marker)
            .await?;
        info!(result_count = ids.len(), "Unsummarized documents discovered");

        let mut stats = RunStats {
            scanned: ids.len(),
            ..RunStats::default()
        };
        for document_id in ids {
            match self.summarize_document(document_id).await {
                Ok(()) => stats.summarized += 1,
                Err(e) => {
                    stats.failed += 1;
                    error!(document_id, error = %e, "Skipping document after failure");
                }
            }
        }
        info!(
            scanned = stats.scanned,
            summarized = stats.summarized,
            failed = stats.failed,
            "Summarization run complete"
        );
        Ok(stats)
    }

    /// Summarize one document: fetch, generate, post the note, and
    /// optionally write the local file.
    async fn summarize_document(&self, document_id: i64) -> Result<()> {
        let document = self.client.fetch_document(document_id).await?;
        let content = document
            .content
            .as_deref()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                Error::MalformedData(format!("document {} has no content", document_id))
            })?;

        let prompt = OllamaBackend::build_prompt(&self.config.prompt, content);
        let stream = self.backend.generate_stream(&prompt).await?;
        let summary = collect_stream(stream, self.echo).await?;

        let body = compose_note_body(&summary, self.config)?;
        self.client.post_note(document_id, &body).await?;
        info!(
            document_id,
            response_len = summary.len(),
            "Summary note posted"
        );

        if self.env.output_txt {
            write_summary_file(&self.env.output_path, document_id, &summary)?;
        }
        Ok(())
    }
}
