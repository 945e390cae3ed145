//! vjdir-server — HTTP transport for the vjdir catalog.
//!
//! Exposes record CRUD, search, and filter-panel projections as a JSON API
//! over a shared [`MemoryStore`].

pub mod api;
pub mod error;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use vjdir_core::{config::ServerConfig, MemoryStore, SearchEngine, SortOrder};

pub use error::ApiError;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    /// Ordering used when a search request does not name one.
    pub default_sort: SortOrder,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>, default_sort: SortOrder) -> Self {
        Self { store, default_sort }
    }

    pub fn engine(&self) -> SearchEngine<Arc<MemoryStore>> {
        SearchEngine::new(Arc::clone(&self.store))
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(api::healthcheck))
        .route("/software", get(api::list_software).post(api::create_software))
        .route("/software/search", post(api::search_software))
        .route(
            "/software/{id}",
            get(api::get_software)
                .patch(api::update_software)
                .delete(api::delete_software),
        )
        .route("/features", get(api::features))
        .route("/facets", get(api::facets))
        .with_state(state)
}

/// Bind to `config` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, records = state.store.len(), "vjdir server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("vjdir server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c; shutting down");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
