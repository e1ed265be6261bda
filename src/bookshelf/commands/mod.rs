//! # Command Layer
//!
//! The **core business logic** of the catalog. Each operation lives in its own
//! submodule as a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate payloads (name present, `readPage <= pageCount`)
//! - Generate ids and timestamps, derive `finished`
//! - Read and write through the store trait
//! - Return typed results or a [`BookshelfError`](crate::error::BookshelfError)
//!   tagged with the [`Action`](crate::error::Action) that failed
//!
//! ## What Commands Do NOT Do
//!
//! - **Any transport concerns**: no status codes, no JSON envelopes
//! - **Locking**: callers hand in exclusive access (`&mut S`)
//!
//! ## Testing Strategy
//!
//! This is where most of the tests live. Command tests run against
//! `InMemoryStore` and the `StoreFixture` builders.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate and append a new book
//! - [`list`]: Filtered, projected listing
//! - [`get`]: Fetch a full record
//! - [`update`]: Validate and replace a record's mutable fields
//! - [`delete`]: Remove a record
//! - [`helpers`]: Validation and id generation shared by the above

pub mod add;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

pub use list::BookFilter;
