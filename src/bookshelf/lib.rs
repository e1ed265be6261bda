//! # Bookshelf Architecture
//!
//! Bookshelf is a small book catalog kept in process memory and served over
//! HTTP. The catalog logic is a library; the server is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses arguments, loads config, installs logging         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/)                                         │
//! │  - Routes, extractors, response envelope, status codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, dispatches to commands                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, id generation, derived `finished`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, insertion-ordered InMemoryStore         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Transport Assumptions Below `http/`
//!
//! From `api.rs` inward, code takes Rust values and returns `Result<T>`. It
//! never builds responses or picks status codes, so the same core can be driven
//! from tests or another front end.
//!
//! ## State
//!
//! There is no global catalog. The server builds one
//! `BookshelfApi<InMemoryStore>` at startup, shares it through axum state and
//! drops it on shutdown. Nothing is persisted.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: `Book`, `BookPayload`, `BookSummary`, `BookId`
//! - [`http`]: axum router and handlers
//! - [`config`]: Layered server configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod store;
