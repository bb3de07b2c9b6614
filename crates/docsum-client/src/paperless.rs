//! HTTP client for the document-management service.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use tracing::{debug, instrument};

use docsum_core::{defaults, Document, Error, Result, SearchPage};

/// Client for the document service's REST API.
///
/// Every request carries `Authorization: Token <apiKey>`. There is no
/// client-side retry: a single failure is reported to the caller, which
/// decides whether the broader loop continues or aborts.
pub struct PaperlessClient {
    client: Client,
    base_url: String,
    token: String,
}

/// Request payload for the notes sub-resource.
#[derive(Serialize)]
struct NoteRequest<'a> {
    note: &'a str,
}

impl PaperlessClient {
    /// Create a client for the given base URL and token.
    pub fn new(base_url: &str, token: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Base URL of the document service, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Seed URL for the document crawl: newest documents first.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/documents/?ordering={}",
            self.base_url,
            defaults::DOCUMENTS_ORDERING
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Token {}", self.token))
    }

    /// Map a non-success response into a `Request` error carrying the
    /// upstream status text verbatim, so operators can diagnose without
    /// packet capture.
    async fn check_status(
        response: reqwest::Response,
        operation: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Request(format!(
            "{}: document service returned {}: {}",
            operation, status, body
        )))
    }

    /// Fetch a single document with its full content and notes.
    #[instrument(skip(self), fields(subsystem = "client", component = "paperless", op = "fetch_document"))]
    pub async fn fetch_document(&self, document_id: i64) -> Result<Document> {
        let url = format!("{}/documents/{}/", self.base_url, document_id);
        let response = self.request(Method::GET, &url).send().await?;
        let response = Self::check_status(response, "fetch_document").await?;
        response
            .json::<Document>()
            .await
            .map_err(|e| Error::MalformedData(format!("document {}: {}", document_id, e)))
    }

    /// Fetch one page of the document listing from an absolute URL (the
    /// crawl seed or a prior page's `next`).
    #[instrument(skip(self, url), fields(subsystem = "client", component = "paperless", op = "list_documents_page", url = %url))]
    pub async fn list_documents_page(&self, url: &str) -> Result<SearchPage> {
        let response = self.request(Method::GET, url).send().await?;
        let response = Self::check_status(response, "list_documents_page").await?;
        let page = response
            .json::<SearchPage>()
            .await
            .map_err(|e| Error::MalformedData(format!("listing page body: {}", e)))?;
        debug!(result_count = page.results.len(), "Listing page fetched");
        Ok(page)
    }

    /// Append a note to a document; returns the updated resource.
    #[instrument(skip(self, text), fields(subsystem = "client", component = "paperless", op = "post_note"))]
    pub async fn post_note(&self, document_id: i64, text: &str) -> Result<Document> {
        let url = format!("{}/documents/{}/notes/", self.base_url, document_id);
        let response = self
            .request(Method::POST, &url)
            .json(&NoteRequest { note: text })
            .send()
            .await?;
        let response = Self::check_status(response, "post_note").await?;
        response
            .json::<Document>()
            .await
            .map_err(|e| Error::MalformedData(format!("post_note response: {}", e)))
    }

    /// Delete one note of a document; returns the raw HTTP status code.
    #[instrument(skip(self), fields(subsystem = "client", component = "paperless", op = "delete_note"))]
    pub async fn delete_note(&self, document_id: i64, note_id: i64) -> Result<u16> {
        let url = format!(
            "{}/documents/{}/notes/?id={}",
            self.base_url, document_id, note_id
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        let response = Self::check_status(response, "delete_note").await?;
        Ok(response.status().as_u16())
    }
}
