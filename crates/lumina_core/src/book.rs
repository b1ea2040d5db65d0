use crate::BookInsight;
use chrono::{DateTime, SubsecRound, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single tracked book.
///
/// A book starts life with only a title and an author; the insight and
/// category arrive later from an insight provider, at which point
/// [`Book::settle`] fills them in and clears the generating flag.
///
/// The serialized form uses camelCase keys and an epoch-millisecond
/// `addedAt`, matching the shelf file on disk.
///
/// # Examples
///
/// ```
/// use lumina_core::Book;
///
/// let book = Book::new("Dune", "Frank Herbert");
/// assert_eq!(book.title(), "Dune");
/// assert_eq!(book.author(), "Frank Herbert");
/// assert!(book.is_generating());
/// assert!(book.insight().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Stable identifier, assigned once at creation.
    id: Uuid,
    /// Title as entered by the reader.
    title: String,
    /// Author as entered by the reader.
    author: String,
    /// Moment the book was added, millisecond precision.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    added_at: DateTime<Utc>,
    /// One-sentence insight from the provider, absent until settled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    insight: Option<String>,
    /// Category label from the provider, absent until settled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    /// True while an insight request is outstanding for this book.
    #[serde(default)]
    is_generating: bool,
}

impl Book {
    /// Creates a new book with a fresh id, stamped with the current time
    /// and marked as generating.
    ///
    /// The timestamp is truncated to millisecond precision, the same
    /// resolution it persists at, so a book compares equal to its
    /// serialized round trip.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            added_at: Utc::now().trunc_subsecs(3),
            insight: None,
            category: None,
            is_generating: true,
        }
    }

    /// Records the provider's insight on this book and clears the
    /// generating flag.
    pub fn settle(&mut self, insight: BookInsight) {
        let (insight, category) = insight.into_parts();
        self.insight = Some(insight);
        self.category = Some(category);
        self.is_generating = false;
    }
}
