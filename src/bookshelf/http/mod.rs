//! # HTTP Layer
//!
//! Maps the `/books` routes onto the [`BookshelfApi`](crate::api::BookshelfApi)
//! and wraps every answer in the `{status, message?, data?}` envelope.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /books` | [`handlers::add_book`] |
//! | `GET /books` | [`handlers::list_books`] |
//! | `GET /books/{book_id}` | [`handlers::get_book`] |
//! | `PUT /books/{book_id}` | [`handlers::update_book`] |
//! | `DELETE /books/{book_id}` | [`handlers::delete_book`] |
//!
//! Unknown paths and unsupported methods both answer with the 404 fail
//! envelope. This is the only layer that knows about status codes.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::Result;

pub mod envelope;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Builds the application router around `state`.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route(
            "/books",
            get(handlers::list_books).post(handlers::add_book),
        )
        .route(
            "/books/{book_id}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.permissive_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Binds the listener and serves until Ctrl-C / SIGTERM.
///
/// The catalog is created here and dropped when the server stops.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::default();
    let app = router(state, &config);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Bookshelf listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Bookshelf stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
