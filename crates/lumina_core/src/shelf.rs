use crate::{Book, BookInsight};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered collection of books, newest first.
///
/// New books are prepended so the most recently added book is always at
/// index zero. The shelf serializes transparently as a bare JSON array of
/// books, which is the exact shape of the shelf file on disk.
///
/// # Examples
///
/// ```
/// use lumina_core::{Book, Shelf};
///
/// let mut shelf = Shelf::default();
/// shelf.add(Book::new("Dune", "Frank Herbert"));
/// shelf.add(Book::new("Emma", "Jane Austen"));
/// assert_eq!(shelf.books()[0].title(), "Emma");
/// assert_eq!(shelf.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    /// Prepends a book, making it the newest entry on the shelf.
    pub fn add(&mut self, book: Book) {
        self.books.insert(0, book);
    }

    /// Returns the book with the given id, if present.
    pub fn get(&self, id: Uuid) -> Option<&Book> {
        self.books.iter().find(|book| *book.id() == id)
    }

    /// Applies an insight to the book with the given id.
    ///
    /// Returns false when no book carries that id, which happens when a
    /// book was deleted while its insight request was still in flight.
    pub fn settle(&mut self, id: Uuid, insight: BookInsight) -> bool {
        match self.books.iter_mut().find(|book| *book.id() == id) {
            Some(book) => {
                book.settle(insight);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the book with the given id, if present.
    pub fn remove(&mut self, id: Uuid) -> Option<Book> {
        let index = self.books.iter().position(|book| *book.id() == id)?;
        Some(self.books.remove(index))
    }

    /// The books in shelf order, newest first.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Iterates over the books in shelf order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Number of books on the shelf.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the shelf holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl From<Vec<Book>> for Shelf {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl<'a> IntoIterator for &'a Shelf {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
