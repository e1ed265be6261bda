use crate::error::Result;
use crate::model::{Book, BookSummary};
use crate::store::DataStore;

/// Optional listing constraints, combined with logical AND.
///
/// `None` means "no constraint on that field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring of the book name.
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(term) = &self.name {
            if !book.name.to_lowercase().contains(&term.to_lowercase()) {
                return false;
            }
        }
        if self.reading.is_some_and(|reading| book.reading != reading) {
            return false;
        }
        if self.finished.is_some_and(|finished| book.finished != finished) {
            return false;
        }
        true
    }
}

pub fn run<S: DataStore>(store: &S, filter: &BookFilter) -> Result<Vec<BookSummary>> {
    let books = store.list_books()?;
    Ok(books
        .iter()
        .filter(|book| filter.matches(book))
        .map(Book::summary)
        .collect())
}
