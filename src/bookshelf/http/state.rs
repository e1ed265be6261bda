//! Shared state for the HTTP handlers.

use crate::api::BookshelfApi;
use crate::store::memory::InMemoryStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The catalog shared by every handler.
///
/// Handlers lock the API for the whole of one operation, so operations never
/// interleave.
#[derive(Clone)]
pub struct AppState {
    api: Arc<Mutex<BookshelfApi<InMemoryStore>>>,
}

impl AppState {
    pub fn new(api: BookshelfApi<InMemoryStore>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
        }
    }

    /// Exclusive access to the catalog.
    ///
    /// A poisoned lock is recovered: every mutation is a single store call, so a
    /// panicking handler cannot leave a half-written record behind.
    pub fn api(&self) -> MutexGuard<'_, BookshelfApi<InMemoryStore>> {
        self.api.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BookshelfApi::new(InMemoryStore::new()))
    }
}
