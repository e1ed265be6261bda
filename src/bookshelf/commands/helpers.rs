use crate::error::{Action, BookshelfError, Result};
use crate::model::{BookId, BookPayload};
use crate::store::DataStore;

/// Checks a payload and returns the name to store.
///
/// Order matters: a missing name is reported before a page overflow.
pub fn validate_payload(payload: &BookPayload, action: Action) -> Result<String> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(BookshelfError::MissingName(action)),
    };

    if payload.read_page > payload.page_count {
        return Err(BookshelfError::PageOverflow(action));
    }

    Ok(name)
}

/// Generates an id that no book in `store` currently uses.
pub fn fresh_id<S: DataStore>(store: &S) -> Result<BookId> {
    loop {
        let id = BookId::generate();
        if !store.contains(&id)? {
            return Ok(id);
        }
        tracing::warn!(book_id = %id, "generated id collided, retrying");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{payload, StoreFixture};

    #[test]
    fn accepts_valid_payload() {
        let name = validate_payload(&payload("Buku A", 100, 100), Action::Add).unwrap();
        assert_eq!(name, "Buku A");
    }

    #[test]
    fn absent_name_is_missing() {
        let mut p = payload("x", 10, 1);
        p.name = None;
        assert!(matches!(
            validate_payload(&p, Action::Add),
            Err(BookshelfError::MissingName(Action::Add))
        ));
    }

    #[test]
    fn empty_name_is_missing() {
        let p = payload("", 10, 1);
        assert!(matches!(
            validate_payload(&p, Action::Update),
            Err(BookshelfError::MissingName(Action::Update))
        ));
    }

    #[test]
    fn read_page_over_page_count_overflows() {
        let p = payload("Buku", 10, 11);
        assert!(matches!(
            validate_payload(&p, Action::Add),
            Err(BookshelfError::PageOverflow(Action::Add))
        ));
    }

    #[test]
    fn missing_name_is_checked_before_overflow() {
        let p = payload("", 10, 11);
        assert!(matches!(
            validate_payload(&p, Action::Add),
            Err(BookshelfError::MissingName(_))
        ));
    }

    #[test]
    fn fresh_id_is_unused() {
        let fixture = StoreFixture::new().with_books(5);
        let id = fresh_id(&fixture.store).unwrap();
        assert!(!fixture.store.contains(&id).unwrap());
    }
}
