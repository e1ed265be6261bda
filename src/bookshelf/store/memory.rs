use super::DataStore;
use crate::error::Result;
use crate::model::{Book, BookId};

/// In-memory, insertion-ordered book storage.
///
/// The collection is a plain `Vec`: lookups are linear scans, which is fine for
/// a personal shelf.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &BookId) -> Option<usize> {
        self.books.iter().position(|book| &book.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn get_book(&self, id: &BookId) -> Result<Option<Book>> {
        Ok(self.position(id).map(|idx| self.books[idx].clone()))
    }

    fn save_book(&mut self, book: &Book) -> Result<()> {
        match self.position(&book.id) {
            Some(idx) => self.books[idx] = book.clone(),
            None => self.books.push(book.clone()),
        }
        Ok(())
    }

    fn delete_book(&mut self, id: &BookId) -> Result<Option<Book>> {
        Ok(self.position(id).map(|idx| self.books.remove(idx)))
    }

    fn contains(&self, id: &BookId) -> Result<bool> {
        Ok(self.position(id).is_some())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.books.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookPayload;
    use chrono::Utc;

    pub fn payload(name: &str, page_count: u32, read_page: u32) -> BookPayload {
        BookPayload {
            name: Some(name.to_string()),
            year: Some(2020),
            author: Some("Anonim".to_string()),
            summary: Some(format!("Ringkasan {}", name)),
            publisher: Some(format!("Penerbit {}", name)),
            page_count,
            read_page,
            reading: false,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(&mut self, name: &str, payload: BookPayload) -> BookId {
            let book = Book::new(BookId::generate(), name.to_string(), payload, Utc::now());
            self.store.save_book(&book).unwrap();
            book.id
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Buku {}", i + 1);
                let payload = payload(&name, 100, 10);
                self.push(&name, payload);
            }
            self
        }

        pub fn with_book(mut self, name: &str, page_count: u32, read_page: u32) -> Self {
            self.push(name, payload(name, page_count, read_page));
            self
        }

        pub fn with_reading_book(mut self, name: &str) -> Self {
            let mut payload = payload(name, 100, 30);
            payload.reading = true;
            self.push(name, payload);
            self
        }

        pub fn with_finished_book(self, name: &str) -> Self {
            self.with_book(name, 100, 100)
        }
    }
}
