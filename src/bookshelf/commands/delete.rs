use crate::error::{Action, BookshelfError, Result};
use crate::model::{Book, BookId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &BookId) -> Result<Book> {
    let removed = store.delete_book(id)?.ok_or_else(|| BookshelfError::NotFound {
        action: Action::Delete,
        id: id.clone(),
    })?;

    tracing::debug!(book_id = %removed.id, "book deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_exactly_one() {
        let mut store = StoreFixture::new().with_books(3).store;
        let target = store.list_books().unwrap()[0].id.clone();

        let removed = run(&mut store, &target).unwrap();

        assert_eq!(removed.id, target);
        assert_eq!(store.len().unwrap(), 2);
        assert!(matches!(
            get::run(&store, &target),
            Err(BookshelfError::NotFound {
                action: Action::Get,
                ..
            })
        ));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = StoreFixture::new().with_books(1).store;
        let err = run(&mut store, &BookId::from("missing")).unwrap_err();
        assert!(matches!(
            err,
            BookshelfError::NotFound {
                action: Action::Delete,
                ..
            }
        ));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn deleting_twice_fails_the_second_time() {
        let mut store = StoreFixture::new().with_books(1).store;
        let target = store.list_books().unwrap()[0].id.clone();
        run(&mut store, &target).unwrap();
        assert!(run(&mut store, &target).is_err());
    }
}
