//! # HTTP Layer
//!
//! The only module that knows about HTTP: routing, extracting request bodies,
//! turning [`ShelfError`](crate::error::ShelfError)s into status codes and
//! shaping JSON. Each handler follows the same steps: parse the request into
//! its struct from [`payload`], call one [`ShelfApi`] method on the blocking
//! pool, wrap the result.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | [`handlers::index`] |
//! | `GET /api/files` | [`handlers::list_files`] |
//! | `POST /api/upload` | [`handlers::upload_file`] |
//! | `GET, POST /api/file/{name}` | [`handlers::get_file`], [`handlers::save_file`] |
//! | `DELETE /api/delete/{name}` | [`handlers::delete_file`] |
//! | `POST /api/rename/{name}` | [`handlers::rename_file`] |
//! | `GET /api/diff` | [`handlers::diff_files`] |
//! | `POST /api/diff/preview` | [`handlers::diff_preview`] |

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::store::DocumentStore;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod payload;

pub struct AppState<S: DocumentStore> {
    pub api: Arc<ShelfApi<S>>,
}

impl<S: DocumentStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

pub fn router<S: DocumentStore + 'static>(api: ShelfApi<S>, max_upload_bytes: usize) -> Router {
    let state = AppState { api: Arc::new(api) };

    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::health))
        .route("/api/files", get(handlers::list_files::<S>))
        .route("/api/upload", post(handlers::upload_file::<S>))
        .route(
            "/api/file/{name}",
            get(handlers::get_file::<S>).post(handlers::save_file::<S>),
        )
        .route("/api/delete/{name}", delete(handlers::delete_file::<S>))
        .route("/api/rename/{name}", post(handlers::rename_file::<S>))
        .route("/api/diff", get(handlers::diff_files::<S>))
        .route("/api/diff/preview", post(handlers::diff_preview::<S>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve documents from `config.root` until Ctrl-C.
pub async fn serve(config: ShelfConfig) -> std::io::Result<()> {
    let api = ShelfApi::from_config(&config);
    let app = router(api, config.max_upload_bytes);

    let listener = TcpListener::bind(config.bind).await?;
    info!(
        root = %config.root.display(),
        "listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
