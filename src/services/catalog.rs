//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::BookStore,
};

/// In-memory book catalog backed by a flat-file store.
///
/// The catalog owns every book. Its store handle is read once at open and
/// written once at close; nothing touches the file in between.
#[derive(Debug)]
pub struct CatalogService {
    store: BookStore,
    books: Vec<Book>,
}

impl CatalogService {
    /// Load the catalog from its store.
    pub fn open(mut store: BookStore) -> AppResult<Self> {
        let books = store.load()?;
        tracing::info!("Loaded {} books from {}", books.len(), store.path().display());
        Ok(Self { store, books })
    }

    /// Add a book. The ISBN must not already be present.
    pub fn add(&mut self, book: Book) -> AppResult<()> {
        if self.find_by_isbn(&book.isbn).is_some() {
            return Err(AppError::DuplicateIsbn(book.isbn));
        }
        tracing::debug!("Book added: {} ({})", book.title, book.isbn);
        self.books.push(book);
        Ok(())
    }

    /// Look up a book by exact ISBN.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// All books whose title or author contains `query` as a case-sensitive
    /// substring, in catalog order. An empty query matches every book.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.title.contains(query) || book.author.contains(query))
            .collect()
    }

    /// Remove every book with the given ISBN.
    ///
    /// Removing all matches rather than the first keeps the catalog clean
    /// even if the uniqueness invariant was ever violated on disk.
    pub fn remove(&mut self, isbn: &str) -> AppResult<()> {
        let before = self.books.len();
        self.books.retain(|book| book.isbn != isbn);
        if self.books.len() == before {
            return Err(AppError::NotFound(format!(
                "Book with ISBN {} not found",
                isbn
            )));
        }
        tracing::debug!("Book removed: {}", isbn);
        Ok(())
    }

    /// Books sorted by title ascending; equal titles keep their insertion
    /// order. Catalog order itself is left untouched, so the saved file
    /// stays in insertion order.
    pub fn list(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.iter().collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Write the catalog back to its store and release the handle.
    pub fn close(mut self) -> AppResult<()> {
        self.store.save(&self.books)?;
        tracing::info!(
            "Saved {} books to {}",
            self.books.len(),
            self.store.path().display()
        );
        Ok(())
    }
}
