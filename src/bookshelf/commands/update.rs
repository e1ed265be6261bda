use crate::error::{Action, BookshelfError, Result};
use crate::model::{Book, BookId, BookPayload};
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::validate_payload;

/// Replaces the mutable fields of an existing book.
///
/// The payload is validated before the id is looked up, so an invalid payload
/// aimed at an unknown id reports the validation failure.
pub fn run<S: DataStore>(store: &mut S, id: &BookId, payload: BookPayload) -> Result<Book> {
    let name = validate_payload(&payload, Action::Update)?;

    let mut book = store.get_book(id)?.ok_or_else(|| BookshelfError::NotFound {
        action: Action::Update,
        id: id.clone(),
    })?;

    book.replace(name, payload, Utc::now());
    store.save_book(&book)?;

    tracing::debug!(book_id = %book.id, finished = book.finished, "book updated");
    Ok(book)
}
