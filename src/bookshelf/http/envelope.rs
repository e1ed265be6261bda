//! The `{status, message?, data?}` response envelope.

use crate::error::{BookshelfError, ErrorKind};
use crate::model::{Book, BookId, BookSummary};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: Option<&str>, data: Option<T>) -> Self {
        Self {
            status: Status::Success,
            message: message.map(str::to_string),
            data,
        }
    }
}

impl Envelope<()> {
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `data` of a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedBook {
    pub book_id: BookId,
}

/// `data` of a listing.
#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of a single-book lookup.
#[derive(Debug, Serialize)]
pub struct BookDetail {
    pub book: Book,
}

pub fn respond<T: Serialize>(code: StatusCode, envelope: Envelope<T>) -> Response {
    (code, Json(envelope)).into_response()
}

impl IntoResponse for BookshelfError {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::Validation => {
                if let BookshelfError::InvalidPayload { reason, .. } = &self {
                    tracing::debug!(%reason, "rejected request body");
                }
                respond(StatusCode::BAD_REQUEST, Envelope::fail(self.to_string()))
            }
            ErrorKind::NotFound => respond(StatusCode::NOT_FOUND, Envelope::fail(self.to_string())),
            ErrorKind::Internal => {
                tracing::error!(error = %self, "request failed");
                respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::fail("Terjadi kegagalan pada server kami"),
                )
            }
        }
    }
}
