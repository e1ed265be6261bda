use crate::model::BookId;
use thiserror::Error;

/// The catalog operation an error was raised from.
///
/// Failure messages differ per operation ("Gagal menambahkan buku..." vs
/// "Gagal memperbarui buku..."), so every domain error carries its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Get,
    Update,
    Delete,
}

impl Action {
    /// Reads have no failure prefix; their only failure is "Buku tidak ditemukan".
    fn failure_prefix(self) -> Option<&'static str> {
        match self {
            Action::Add => Some("Gagal menambahkan buku"),
            Action::Get => None,
            Action::Update => Some("Gagal memperbarui buku"),
            Action::Delete => Some("Buku gagal dihapus"),
        }
    }

    /// Message returned to clients when the action succeeds. Reads carry none.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Action::Add => Some("Buku berhasil ditambahkan"),
            Action::Get => None,
            Action::Update => Some("Buku berhasil diperbarui"),
            Action::Delete => Some("Buku berhasil dihapus"),
        }
    }
}

fn failure(action: &Action, reason: &str) -> String {
    match action.failure_prefix() {
        Some(prefix) => format!("{}. {}", prefix, reason),
        None => reason.to_string(),
    }
}

fn missing_name_message(action: &Action) -> String {
    failure(action, "Mohon isi nama buku")
}

fn page_overflow_message(action: &Action) -> String {
    failure(action, "readPage tidak boleh lebih besar dari pageCount")
}

fn not_found_message(action: &Action) -> String {
    match *action {
        Action::Get => "Buku tidak ditemukan".to_string(),
        other => failure(&other, "Id tidak ditemukan"),
    }
}

fn invalid_payload_message(action: &Action) -> String {
    failure(action, "Payload tidak valid")
}

/// Coarse classification used by callers to pick a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("{}", missing_name_message(.0))]
    MissingName(Action),

    #[error("{}", page_overflow_message(.0))]
    PageOverflow(Action),

    #[error("{}", not_found_message(.action))]
    NotFound { action: Action, id: BookId },

    #[error("{}", invalid_payload_message(.action))]
    InvalidPayload { action: Action, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BookshelfError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookshelfError::MissingName(_)
            | BookshelfError::PageOverflow(_)
            | BookshelfError::InvalidPayload { .. } => ErrorKind::Validation,
            BookshelfError::NotFound { .. } => ErrorKind::NotFound,
            BookshelfError::Config(_)
            | BookshelfError::Io(_)
            | BookshelfError::Serialization(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
