//! Cleanup workflows: purge previously written summary notes.

use std::time::Duration;

use futures::future::join_all;
use tracing::{error, info, warn};

use docsum_client::{DocumentCrawler, PaperlessClient};
use docsum_core::{defaults, Error, Result, SearchPage};

/// Operating mode parsed from the single CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupTarget {
    /// Crawl every page and delete all marker notes.
    All,
    /// Delete the marker notes of a single document.
    Document(i64),
}

impl CleanupTarget {
    /// Validate the positional arguments: exactly one, either the literal
    /// `all` or a positive integer document id. Runs before any network
    /// activity.
    pub fn parse(args: &[String]) -> Result<Self> {
        if args.len() != 1 {
            return Err(Error::InvalidInput(format!(
                "expected exactly one argument ('all' or a document id), got {}",
                args.len()
            )));
        }
        let arg = &args[0];
        if arg == "all" {
            return Ok(Self::All);
        }
        match arg.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self::Document(id)),
            _ => Err(Error::InvalidInput(format!(
                "expected 'all' or a positive document id, got '{}'",
                arg
            ))),
        }
    }
}

/// Executes the cleanup workflow against the document service.
pub struct NoteCleanup<'a> {
    client: &'a PaperlessClient,
    marker: String,
    page_timeout: Duration,
}

impl<'a> NoteCleanup<'a> {
    pub fn new(client: &'a PaperlessClient, marker: &str) -> Self {
        Self {
            client,
            marker: marker.to_string(),
            page_timeout: Duration::from_secs(defaults::CLEANUP_PAGE_TIMEOUT_SECS),
        }
    }

    /// Override the per-page request deadline of the all-mode crawl.
    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self
    }

    /// Run the selected mode; returns the number of deleted notes.
    pub async fn run(&self, target: CleanupTarget) -> Result<u64> {
        match target {
            CleanupTarget::All => self.run_all().await,
            CleanupTarget::Document(document_id) => self.run_document(document_id).await,
        }
    }

    /// Crawl every page, deleting marker notes page by page.
    ///
    /// Page requests are bounded by a 30-second deadline enforced by
    /// cancellation; a timed-out page is logged and ends the crawl without
    /// failing the run. Any other crawl error is fatal and re-raised.
    async fn run_all(&self) -> Result<u64> {
        let mut crawler = DocumentCrawler::new(self.client).with_page_timeout(self.page_timeout);

        let mut deleted = 0u64;
        loop {
            let page = match crawler.next_page().await {
                Ok(Some(page)) => page,
                Ok(None) => break,
                Err(Error::Timeout(msg)) => {
                    warn!(error = %msg, "Page request timed out, ending cleanup crawl");
                    break;
                }
                Err(e) => return Err(e),
            };
            deleted += self.delete_page_notes(&page).await;
        }
        info!(deleted, "Cleanup crawl complete");
        Ok(deleted)
    }

    /// Dispatch all of a page's marker-note deletions concurrently and
    /// wait for every outcome before proceeding. A failed deletion is
    /// logged with both ids and never blocks the others.
    async fn delete_page_notes(&self, page: &SearchPage) -> u64 {
        let mut targets = Vec::new();
        for document in &page.results {
            let document_id = match document.id {
                Some(id) => id,
                None => continue,
            };
            for note_id in document.marker_note_ids(&self.marker) {
                targets.push((document_id, note_id));
            }
        }

        let outcomes = join_all(targets.into_iter().map(|(document_id, note_id)| async move {
            let result = self.client.delete_note(document_id, note_id).await;
            (document_id, note_id, result)
        }))
        .await;

        let mut deleted = 0u64;
        for (document_id, note_id, result) in outcomes {
            match result {
                Ok(_) => {
                    info!(document_id, note_id, "Summary note deleted");
                    deleted += 1;
                }
                Err(e) => {
                    error!(document_id, note_id, error = %e, "Failed to delete note");
                }
            }
        }
        deleted
    }

    /// Delete the marker notes of one document, one at a time, isolating
    /// each note's failure.
    async fn run_document(&self, document_id: i64) -> Result<u64> {
        let document = self.client.fetch_document(document_id).await?;
        let note_ids = document.marker_note_ids(&self.marker);
        info!(
            document_id,
            result_count = note_ids.len(),
            "Marker notes found"
        );

        let mut deleted = 0u64;
        for note_id in note_ids {
            match self.client.delete_note(document_id, note_id).await {
                Ok(_) => {
                    info!(document_id, note_id, "Summary note deleted");
                    deleted += 1;
                }
                Err(e) => {
                    error!(document_id, note_id, error = %e, "Failed to delete note");
                }
            }
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(
            CleanupTarget::parse(&args(&["all"])).unwrap(),
            CleanupTarget::All
        );
    }

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(
            CleanupTarget::parse(&args(&["42"])).unwrap(),
            CleanupTarget::Document(42)
        );
    }

    #[test]
    fn test_parse_negative_id_is_usage_error() {
        let err = CleanupTarget::parse(&args(&["-5"])).unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert!(msg.contains("-5")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_zero_is_usage_error() {
        assert!(CleanupTarget::parse(&args(&["0"])).is_err());
    }

    #[test]
    fn test_parse_garbage_is_usage_error() {
        assert!(CleanupTarget::parse(&args(&["everything"])).is_err());
    }

    #[test]
    fn test_parse_no_args_is_usage_error() {
        assert!(CleanupTarget::parse(&[]).is_err());
    }

    #[test]
    fn test_parse_extra_args_is_usage_error() {
        assert!(CleanupTarget::parse(&args(&["all", "7"])).is_err());
    }

    #[test]
    fn test_parse_case_sensitive() {
        // Only the literal token counts.
        assert!(CleanupTarget::parse(&args(&["ALL"])).is_err());
    }
}
