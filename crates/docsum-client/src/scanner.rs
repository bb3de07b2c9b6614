//! Shared pagination crawler for the document listing.

use std::time::Duration;

use tracing::{debug, error};

use docsum_core::{Document, Error, Result, SearchPage};

use crate::paperless::PaperlessClient;

/// Follows the paginated document listing end-to-end.
///
/// Both workflows share this single pagination implementation: discovery
/// folds documents through a classification callback via [`scan`], and
/// cleanup drives [`next_page`] directly to delete notes page by page.
///
/// [`scan`]: DocumentCrawler::scan
/// [`next_page`]: DocumentCrawler::next_page
pub struct DocumentCrawler<'a> {
    client: &'a PaperlessClient,
    next: Option<String>,
    page_timeout: Option<Duration>,
}

impl<'a> DocumentCrawler<'a> {
    /// Seed the crawl at the descending-id listing URL.
    pub fn new(client: &'a PaperlessClient) -> Self {
        Self {
            client,
            next: Some(client.documents_url()),
            page_timeout: None,
        }
    }

    /// Bound each page request with a deadline enforced by cancellation.
    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = Some(timeout);
        self
    }

    /// Fetch the next page, or `None` when the crawl is complete.
    ///
    /// A continuation link that does not start with the configured base
    /// URL is a protocol violation: the offending URL is logged and the
    /// crawl terminates without following it. The containment check is a
    /// plain prefix match.
    pub async fn next_page(&mut self) -> Result<Option<SearchPage>> {
        let url = match self.next.take() {
            Some(url) => url,
            None => return Ok(None),
        };

        if !url.starts_with(self.client.base_url()) {
            error!(url = %url, "Refusing pagination link outside the base URL, stopping crawl");
            return Ok(None);
        }

        let page = match self.page_timeout {
            Some(timeout) => {
                tokio::time::timeout(timeout, self.client.list_documents_page(&url))
                    .await
                    .map_err(|_| {
                        Error::Timeout(format!(
                            "page request exceeded {}s: {}",
                            timeout.as_secs(),
                            url
                        ))
                    })??
            }
            None => self.client.list_documents_page(&url).await?,
        };

        self.next = page.next.clone();
        Ok(Some(page))
    }

    /// Drive the crawl to exhaustion, folding every document through the
    /// classification callback. Collected values keep page-then-within-page
    /// order. Documents without an id are skipped as malformed; any page
    /// failure aborts the whole scan.
    pub async fn scan<T, F>(mut self, mut classify: F) -> Result<Vec<T>>
    where
        F: FnMut(&Document) -> Option<T>,
    {
        let mut collected = Vec::new();
        let mut pages = 0usize;
        while let Some(page) = self.next_page().await? {
            pages += 1;
            for document in &page.results {
                if document.id.is_none() {
                    debug!("Skipping listed document without id");
                    continue;
                }
                if let Some(item) = classify(document) {
                    collected.push(item);
                }
            }
        }
        debug!(
            pages,
            result_count = collected.len(),
            "Document scan complete"
        );
        Ok(collected)
    }

    /// Ids of documents not yet carrying a marker note, in crawl order.
    pub async fn unsummarized_ids(self, marker: &str) -> Result<Vec<i64>> {
        self.scan(|document| {
            if document.has_marker_note(marker) {
                None
            } else {
                document.id
            }
        })
        .await
    }
}
