use crate::error::{Action, BookshelfError, Result};
use crate::model::{Book, BookId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &BookId) -> Result<Book> {
    store.get_book(id)?.ok_or_else(|| BookshelfError::NotFound {
        action: Action::Get,
        id: id.clone(),
    })
}
