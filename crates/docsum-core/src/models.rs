//! Remote data model for the document service.
//!
//! These types mirror the wire shape of the document-management API. The
//! service owns the entities; this system only reads documents, appends
//! summary notes, and deletes notes it previously wrote. List views may
//! omit fields that the single-document endpoint includes (notably
//! `content`), so everything beyond `id` is optional.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A note attached to a document.
///
/// A note is an AI summary note iff its text contains the configured
/// marker as a substring. Partial matches count: run metadata is appended
/// after the marker, so exact equality would never match.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub document: Option<i64>,
    #[serde(default)]
    pub user: Option<i64>,
}

impl Note {
    /// True when the note text contains `marker` as a substring.
    pub fn contains_marker(&self, marker: &str) -> bool {
        self.note
            .as_deref()
            .map(|text| text.contains(marker))
            .unwrap_or(false)
    }
}

/// A document owned by the remote service.
///
/// `id` is optional because listing pages occasionally carry malformed
/// entries; the scanner skips those rather than failing the crawl.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Document {
    /// True when at least one note carries the marker substring.
    pub fn has_marker_note(&self, marker: &str) -> bool {
        self.notes.iter().any(|note| note.contains_marker(marker))
    }

    /// Ids of the notes carrying the marker substring, in service order.
    pub fn marker_note_ids(&self, marker: &str) -> Vec<i64> {
        self.notes
            .iter()
            .filter(|note| note.contains_marker(marker))
            .map(|note| note.id)
            .collect()
    }
}

/// One page of a paginated document listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub count: Option<i64>,
    /// Absolute URL of the next page, absent on the last page.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Document>,
}
