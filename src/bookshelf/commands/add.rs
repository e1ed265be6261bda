use crate::error::{Action, Result};
use crate::model::{Book, BookId, BookPayload};
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::{fresh_id, validate_payload};

pub fn run<S: DataStore>(store: &mut S, payload: BookPayload) -> Result<BookId> {
    let name = validate_payload(&payload, Action::Add)?;
    let id = fresh_id(store)?;

    let book = Book::new(id, name, payload, Utc::now());
    store.save_book(&book)?;

    tracing::debug!(book_id = %book.id, finished = book.finished, "book added");
    Ok(book.id)
}
