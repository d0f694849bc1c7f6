//! Page records and the static content table.

use std::collections::HashMap;

use serde::Deserialize;

/// Key of the record served for unresolved routes.
pub const NOT_FOUND_KEY: &str = "404";

/// A single documentation page entry.
///
/// Records are deserialized from the content table JSON and never mutated
/// at runtime. The markdown body is implicitly trusted: raw HTML embedded
/// in it passes through rendering unsanitized.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PageRecord {
    /// Page title, shown as the main heading and in the browser tab.
    pub title: String,
    /// Short description, shown on teaser cards.
    pub description: String,
    /// Hero image URL.
    pub image: String,
    /// Raw markdown body.
    pub markdown: String,
    /// Key of the next page in the reading sequence, if any.
    #[serde(default)]
    pub next: Option<String>,
}

/// Error loading the content table.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The table JSON could not be parsed.
    #[error("Invalid content table: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table has no record under [`NOT_FOUND_KEY`].
    #[error("Content table has no \"{NOT_FOUND_KEY}\" page to serve for unresolved routes")]
    MissingNotFoundPage,
}

/// Immutable mapping from page key to [`PageRecord`].
///
/// # Invariants
///
/// A record under [`NOT_FOUND_KEY`] always exists; [`from_json`](Self::from_json)
/// rejects tables without one. `next` pointers are not required to resolve:
/// a dangling pointer is reported once at load time and the teaser for it is
/// omitted at render time.
#[derive(Clone, Debug)]
pub struct ContentTable {
    pages: HashMap<String, PageRecord>,
}

impl ContentTable {
    /// Parse and validate a content table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] for malformed JSON and
    /// [`ContentError::MissingNotFoundPage`] when the [`NOT_FOUND_KEY`]
    /// record is absent.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let pages: HashMap<String, PageRecord> = serde_json::from_str(json)?;

        if !pages.contains_key(NOT_FOUND_KEY) {
            return Err(ContentError::MissingNotFoundPage);
        }

        for (key, record) in &pages {
            if let Some(next) = &record.next
                && !pages.contains_key(next)
            {
                tracing::warn!(
                    page = %key,
                    next = %next,
                    "Next pointer names an unknown page, its teaser will be omitted"
                );
            }
        }

        Ok(Self { pages })
    }

    /// Check whether a key exists in the table.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    /// Look up a record by key.
    #[must_use]
    pub fn record(&self, key: &str) -> Option<&PageRecord> {
        self.pages.get(key)
    }

    /// Look up a record by key, falling back to the not-found record.
    ///
    /// The fallback cannot fail: [`from_json`](Self::from_json) guarantees
    /// the [`NOT_FOUND_KEY`] record exists.
    #[must_use]
    pub fn record_or_not_found(&self, key: &str) -> &PageRecord {
        self.pages.get(key).unwrap_or_else(|| &self.pages[NOT_FOUND_KEY])
    }

    /// Resolve a record's `next` pointer.
    ///
    /// Returns the next key and record, or `None` when no `next` is declared
    /// or when it names a key absent from the table.
    #[must_use]
    pub fn next_record<'a>(&'a self, record: &'a PageRecord) -> Option<(&'a str, &'a PageRecord)> {
        let next = record.next.as_deref()?;
        self.pages.get(next).map(|record| (next, record))
    }

    /// Iterate over all page keys and records.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageRecord)> {
        self.pages.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Number of records in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
