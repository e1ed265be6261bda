//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the command layer and wherever
//! books actually live. Commands only ever talk to the trait.
//!
//! ## Ordering
//!
//! Stores keep insertion order. `save_book` replaces a record in place when its
//! id is already present and appends otherwise; `delete_book` removes a single
//! record without reordering the rest.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the process-lifetime catalog. Nothing survives a
//!   restart.

use crate::error::Result;
use crate::model::{Book, BookId};

pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// All books, in insertion order.
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Get a book by id, or `None` if there is no such book.
    fn get_book(&self, id: &BookId) -> Result<Option<Book>>;

    /// Save a book: replace in place when the id exists, append otherwise.
    fn save_book(&mut self, book: &Book) -> Result<()>;

    /// Remove a book, returning it if it was present.
    fn delete_book(&mut self, id: &BookId) -> Result<Option<Book>>;

    fn contains(&self, id: &BookId) -> Result<bool> {
        Ok(self.get_book(id)?.is_some())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.list_books()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
