//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for catalog operations, whatever the transport.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** the store. There is no global collection; whoever builds a
//!   `BookshelfApi` decides its lifetime.
//! - **Dispatches** to the matching command function
//! - **Returns typed results** (`Result<BookId>`, `Result<Vec<BookSummary>>`, ...)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Transport**: no status codes or envelopes, see `http/`
//!
//! ## Generic Over DataStore
//!
//! `BookshelfApi<S: DataStore>` is generic over the storage backend so it can
//! be exercised in tests without starting a server.

use crate::commands;
use crate::error::Result;
use crate::model::{Book, BookId, BookPayload, BookSummary};
use crate::store::DataStore;

pub use crate::commands::BookFilter;

/// The main API facade for catalog operations.
pub struct BookshelfApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> BookshelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_book(&mut self, payload: BookPayload) -> Result<BookId> {
        commands::add::run(&mut self.store, payload)
    }

    pub fn list_books(&self, filter: &BookFilter) -> Result<Vec<BookSummary>> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_book(&self, id: &BookId) -> Result<Book> {
        commands::get::run(&self.store, id)
    }

    pub fn update_book(&mut self, id: &BookId, payload: BookPayload) -> Result<Book> {
        commands::update::run(&mut self.store, id, payload)
    }

    pub fn delete_book(&mut self, id: &BookId) -> Result<Book> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
