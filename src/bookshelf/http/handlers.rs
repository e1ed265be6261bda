//! Request handlers for the `/books` routes.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Response};

use super::envelope::{respond, AddedBook, BookDetail, BookList, Envelope};
use super::state::AppState;
use crate::api::BookFilter;
use crate::error::{Action, BookshelfError, Result};
use crate::model::{BookId, BookPayload};

/// Query string of `GET /books`.
///
/// Flags are kept as raw strings: `"1"` means true and anything else, empty
/// included, means false. A flag that is not present leaves the field
/// unconstrained.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Stands in for a flag given more than once. It is never `"1"`.
const REPEATED_FLAG: &str = "";

impl FromIterator<(String, String)> for ListQuery {
    /// Unknown keys are ignored. A repeated `name` keeps its first value and a
    /// repeated flag reads as false.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => {
                    query.name.get_or_insert(value);
                    continue;
                }
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            let value = if slot.is_some() {
                REPEATED_FLAG.to_string()
            } else {
                value
            };
            *slot = Some(value);
        }
        query
    }
}

fn list_query(
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ListQuery {
    match query {
        Ok(Query(pairs)) => pairs.into_iter().collect(),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "unreadable query, listing unfiltered");
            ListQuery::default()
        }
    }
}

fn flag(raw: Option<String>) -> Option<bool> {
    raw.map(|value| value == "1")
}

impl From<ListQuery> for BookFilter {
    fn from(query: ListQuery) -> Self {
        BookFilter {
            name: query.name,
            reading: flag(query.reading),
            finished: flag(query.finished),
        }
    }
}

/// Resolves the `{book_id}` segment.
///
/// A segment axum cannot decode names no stored book, so it becomes the empty
/// id, which is never generated. The operation then fails with its own
/// not-found error after any payload validation.
fn path_id(path: std::result::Result<Path<String>, PathRejection>) -> BookId {
    match path {
        Ok(Path(id)) => BookId::from(id),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "undecodable book id");
            BookId::from(String::new())
        }
    }
}

fn body(
    payload: std::result::Result<Json<BookPayload>, JsonRejection>,
    action: Action,
) -> Result<BookPayload> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| BookshelfError::InvalidPayload {
            action,
            reason: rejection.body_text(),
        })
}

/// Adds a book.
///
/// POST /books
pub async fn add_book(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookPayload>, JsonRejection>,
) -> Result<Response> {
    let payload = body(payload, Action::Add)?;
    let id = state.api().add_book(payload)?;

    tracing::info!(book_id = %id, "book added");
    Ok(respond(
        StatusCode::CREATED,
        Envelope::success(
            Action::Add.success_message(),
            Some(AddedBook { book_id: id }),
        ),
    ))
}

/// Lists books, optionally filtered by `name`, `reading` and `finished`.
///
/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response> {
    let filter = BookFilter::from(list_query(query));
    let books = state.api().list_books(&filter)?;

    tracing::debug!(?filter, count = books.len(), "books listed");
    Ok(respond(
        StatusCode::OK,
        Envelope::success(None, Some(BookList { books })),
    ))
}

/// Returns one full record.
///
/// GET /books/{book_id}
pub async fn get_book(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let book = state.api().get_book(&path_id(path))?;
    Ok(respond(
        StatusCode::OK,
        Envelope::success(Action::Get.success_message(), Some(BookDetail { book })),
    ))
}

/// Replaces a book's mutable fields.
///
/// PUT /books/{book_id}
pub async fn update_book(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    payload: std::result::Result<Json<BookPayload>, JsonRejection>,
) -> Result<Response> {
    let payload = body(payload, Action::Update)?;
    let book = state.api().update_book(&path_id(path), payload)?;

    tracing::info!(book_id = %book.id, "book updated");
    Ok(respond(
        StatusCode::OK,
        Envelope::<()>::success(Action::Update.success_message(), None),
    ))
}

/// Removes a book.
///
/// DELETE /books/{book_id}
pub async fn delete_book(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let removed = state.api().delete_book(&path_id(path))?;

    tracing::info!(book_id = %removed.id, "book deleted");
    Ok(respond(
        StatusCode::OK,
        Envelope::<()>::success(Action::Delete.success_message(), None),
    ))
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    respond(
        StatusCode::NOT_FOUND,
        Envelope::fail("Halaman tidak ditemukan"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::payload;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn expect_err(result: Result<Response>) -> BookshelfError {
        match result {
            Err(err) => err,
            Ok(response) => panic!("Expected an error, got {}", response.status()),
        }
    }

    #[test]
    fn flags_are_permissive() {
        assert_eq!(flag(Some("1".into())), Some(true));
        assert_eq!(flag(Some("0".into())), Some(false));
        assert_eq!(flag(Some("true".into())), Some(false));
        assert_eq!(flag(Some(String::new())), Some(false));
        assert_eq!(flag(None), None);
    }

    #[test]
    fn query_maps_to_filter() {
        let filter = BookFilter::from(ListQuery {
            name: Some("dicoding".into()),
            reading: Some("1".into()),
            finished: None,
        });
        assert_eq!(
            filter,
            BookFilter {
                name: Some("dicoding".into()),
                reading: Some(true),
                finished: None,
            }
        );
    }

    fn pairs(raw: &[(&str, &str)]) -> ListQuery {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_flags_read_as_false() {
        let filter = BookFilter::from(pairs(&[("reading", "1"), ("reading", "1")]));
        assert_eq!(filter.reading, Some(false));

        let filter = BookFilter::from(pairs(&[("finished", "0"), ("finished", "1")]));
        assert_eq!(filter.finished, Some(false));
    }

    #[test]
    fn first_name_wins_and_unknown_keys_are_ignored() {
        let query = pairs(&[("name", "a"), ("page", "2"), ("name", "b")]);
        assert_eq!(
            query,
            ListQuery {
                name: Some("a".into()),
                reading: None,
                finished: None,
            }
        );
    }

    #[tokio::test]
    async fn test_add_book_created() {
        let state = AppState::default();
        let response = add_book(State(state.clone()), Ok(Json(payload("Buku A", 10, 1))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Buku berhasil ditambahkan");
        let id = body["data"]["bookId"].as_str().unwrap();
        assert!(state.api().get_book(&BookId::from(id)).is_ok());
    }

    #[tokio::test]
    async fn test_add_book_missing_name() {
        let state = AppState::default();
        let mut p = payload("x", 10, 1);
        p.name = None;

        let err = expect_err(add_book(State(state), Ok(Json(p))).await);
        assert!(matches!(err, BookshelfError::MissingName(Action::Add)));
    }

    #[tokio::test]
    async fn test_update_unknown_book() {
        let state = AppState::default();
        let err = expect_err(
            update_book(
                State(state),
                Ok(Path("missing".to_string())),
                Ok(Json(payload("X", 1, 1))),
            )
            .await,
        );
        assert!(matches!(
            err,
            BookshelfError::NotFound {
                action: Action::Update,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_delete_book() {
        let state = AppState::default();
        let id = state.api().add_book(payload("Hapus", 1, 0)).unwrap();

        let response = delete_book(State(state.clone()), Ok(Path(id.to_string())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["message"], "Buku berhasil dihapus");
        assert!(state.api().get_book(&id).is_err());
    }

    #[tokio::test]
    async fn test_not_found_fallback() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["status"], "fail");
    }
}
