//! Library state and the enrichment lifecycle.
//!
//! The [`Library`] owns the in-memory shelf and everything that changes
//! it. Mutations follow a fixed rhythm: update the shelf, persist it,
//! then (for new books) dispatch a background insight request. Results
//! come back over an in-process channel and are applied between frames,
//! so the shelf is only ever touched from the task that owns the library.

use lumina_core::{Book, BookInsight, InsightRequest, Shelf};
use lumina_error::LuminaResult;
use lumina_interface::InsightDriver;
use lumina_storage::ShelfStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::instrument;
use uuid::Uuid;

/// Which draft field currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    /// The title input
    #[default]
    Title,
    /// The author input
    Author,
}

/// A settled insight on its way back to the library.
#[derive(Debug, Clone)]
struct Settlement {
    book_id: Uuid,
    insight: BookInsight,
}

/// The reading list and its enrichment machinery.
///
/// Holds the shelf, the draft form state, the storage backend, and the
/// insight driver. Background insight requests report back through an
/// unbounded channel owned here; callers apply them with
/// [`Library::drain_settlements`] or [`Library::wait_for_settlement`].
///
/// Save failures after the initial load are logged and swallowed so a
/// full disk or permissions problem degrades to a session-only library
/// instead of crashing the app.
pub struct Library<D: InsightDriver> {
    shelf: Shelf,
    draft_title: String,
    draft_author: String,
    /// Id of the book whose submission is still generating, if any.
    pending_submission: Option<Uuid>,
    store: Arc<dyn ShelfStore>,
    driver: Arc<D>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    settlements_tx: mpsc::UnboundedSender<Settlement>,
    settlements_rx: mpsc::UnboundedReceiver<Settlement>,
}

impl<D: InsightDriver> std::fmt::Debug for Library<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.shelf.len())
            .field("pending_submission", &self.pending_submission)
            .finish_non_exhaustive()
    }
}

impl<D: InsightDriver + 'static> Library<D> {
    /// Create a library with provider-default generation parameters.
    pub fn new(store: Arc<dyn ShelfStore>, driver: Arc<D>) -> Self {
        Self::with_generation(store, driver, None, None)
    }

    /// Create a library with explicit generation parameters.
    ///
    /// The parameters are attached to every insight request this library
    /// dispatches; `None` leaves the provider default in place.
    pub fn with_generation(
        store: Arc<dyn ShelfStore>,
        driver: Arc<D>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Self {
        let (settlements_tx, settlements_rx) = mpsc::unbounded_channel();

        Self {
            shelf: Shelf::default(),
            draft_title: String::new(),
            draft_author: String::new(),
            pending_submission: None,
            store,
            driver,
            temperature,
            max_tokens,
            settlements_tx,
            settlements_rx,
        }
    }

    /// Load the persisted shelf and requeue unfinished insight requests.
    ///
    /// A book still marked generating was interrupted mid-request in an
    /// earlier session; it gets a fresh request so it settles like any
    /// other book instead of staying stuck.
    ///
    /// # Errors
    ///
    /// Returns an error when the shelf file exists but cannot be read.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> LuminaResult<()> {
        let books = self.store.load().await?;
        self.shelf = Shelf::from(books);

        let stuck: Vec<(Uuid, String, String)> = self
            .shelf
            .iter()
            .filter(|book| *book.is_generating())
            .map(|book| (*book.id(), book.title().clone(), book.author().clone()))
            .collect();

        if !stuck.is_empty() {
            tracing::info!(
                count = stuck.len(),
                "Requeueing insight requests interrupted last session"
            );
        }

        for (id, title, author) in stuck {
            self.dispatch_enrichment(id, &title, &author);
        }

        Ok(())
    }

    /// Add a book to the shelf and kick off its insight request.
    ///
    /// The book lands on the shelf and on disk immediately, marked as
    /// generating; the insight arrives later as a settlement. Blank or
    /// whitespace-only input is rejected without touching any state.
    ///
    /// Returns the new book's id, or `None` when the input was rejected.
    #[instrument(skip(self), fields(title = title, author = author))]
    pub async fn add_book(&mut self, title: &str, author: &str) -> Option<Uuid> {
        let title = title.trim();
        let author = author.trim();

        if title.is_empty() || author.is_empty() {
            tracing::debug!("Ignoring submission with blank title or author");
            return None;
        }

        let book = Book::new(title, author);
        let id = *book.id();

        self.pending_submission = Some(id);
        self.shelf.add(book);
        self.persist().await;
        self.dispatch_enrichment(id, title, author);

        Some(id)
    }

    /// Remove a book from the shelf.
    ///
    /// Returns the removed book, or `None` when no book carries the id.
    /// An insight that later arrives for a removed book is dropped.
    #[instrument(skip(self), fields(book_id = %id))]
    pub async fn delete_book(&mut self, id: Uuid) -> Option<Book> {
        let removed = self.shelf.remove(id);

        if removed.is_some() {
            // Deleting the in-flight book frees the form right away
            if self.pending_submission == Some(id) {
                self.pending_submission = None;
            }
            self.persist().await;
        }

        removed
    }

    /// Apply every settlement that has already arrived.
    ///
    /// Returns the number recorded on the shelf; settlements for books
    /// deleted in the meantime are dropped and not counted. Call this
    /// once per frame; it never blocks waiting for outstanding requests.
    pub async fn drain_settlements(&mut self) -> usize {
        let mut recorded = 0;
        while let Ok(settlement) = self.settlements_rx.try_recv() {
            if self.apply_settlement(settlement).await {
                recorded += 1;
            }
        }
        recorded
    }

    /// Block until the book with the given id settles.
    ///
    /// Settlements for other books arriving in the meantime are applied
    /// as they come. Returns immediately when the book is already
    /// settled or no longer on the shelf.
    pub async fn wait_for_settlement(&mut self, id: Uuid) {
        let waiting = self
            .shelf
            .get(id)
            .map(|book| *book.is_generating())
            .unwrap_or(false);
        if !waiting {
            return;
        }

        while let Some(settlement) = self.settlements_rx.recv().await {
            let settled_id = settlement.book_id;
            self.apply_settlement(settlement).await;
            if settled_id == id {
                break;
            }
        }
    }

    /// The current draft text for a form field.
    pub fn draft(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.draft_title,
            DraftField::Author => &self.draft_author,
        }
    }

    /// Append a character to a draft field.
    pub fn push_draft(&mut self, field: DraftField, c: char) {
        match field {
            DraftField::Title => self.draft_title.push(c),
            DraftField::Author => self.draft_author.push(c),
        }
    }

    /// Delete the last character of a draft field.
    pub fn pop_draft(&mut self, field: DraftField) {
        match field {
            DraftField::Title => self.draft_title.pop(),
            DraftField::Author => self.draft_author.pop(),
        };
    }

    /// Clear both draft fields.
    pub fn clear_draft(&mut self) {
        self.draft_title.clear();
        self.draft_author.clear();
    }

    /// Submit the draft form as a new book.
    ///
    /// Refused while an earlier submission is still generating, matching
    /// the disabled state of the form. On success the draft is cleared.
    pub async fn submit_draft(&mut self) -> Option<Uuid> {
        if self.pending_submission.is_some() {
            tracing::debug!("Submission already in flight, ignoring");
            return None;
        }

        let title = self.draft_title.clone();
        let author = self.draft_author.clone();
        let id = self.add_book(&title, &author).await?;
        self.clear_draft();
        Some(id)
    }

    /// True while the most recent submission is still generating.
    pub fn is_submitting(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// The shelf, newest book first.
    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    /// Spawn the background task that fetches an insight for one book.
    ///
    /// The task always produces a settlement: a failed request settles
    /// with the fallback insight rather than leaving the book generating.
    fn dispatch_enrichment(&self, id: Uuid, title: &str, author: &str) {
        let mut request = InsightRequest::new(title, author);
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let driver = Arc::clone(&self.driver);
        let tx = self.settlements_tx.clone();

        tokio::spawn(async move {
            let insight = match driver.fetch_insight(&request).await {
                Ok(insight) => insight,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        book_id = %id,
                        "Insight request failed, settling with fallback"
                    );
                    BookInsight::fallback()
                }
            };

            // Send fails only when the library is gone; nothing to settle then
            let _ = tx.send(Settlement {
                book_id: id,
                insight,
            });
        });
    }

    /// Record one settlement on the shelf.
    ///
    /// Returns true when the settlement landed on a book, false when the
    /// book was removed while the request was in flight.
    async fn apply_settlement(&mut self, settlement: Settlement) -> bool {
        let Settlement { book_id, insight } = settlement;

        if self.pending_submission == Some(book_id) {
            self.pending_submission = None;
        }

        if self.shelf.settle(book_id, insight) {
            self.persist().await;
            true
        } else {
            tracing::debug!(
                book_id = %book_id,
                "Book removed before its insight arrived, dropping result"
            );
            false
        }
    }

    /// Save the shelf, downgrading failure to a warning.
    async fn persist(&self) {
        if let Err(e) = self.store.save(self.shelf.books()).await {
            tracing::warn!(error = %e, "Failed to save shelf, keeping in-memory state");
        }
    }
}
