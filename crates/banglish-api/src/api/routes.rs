//! Router definition

use axum::{
  Router,
  http::{HeaderValue, Method, header::CONTENT_TYPE},
  routing::get,
};
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::config::ALLOWED_ORIGINS;
use crate::errors::ApiError;

use super::handlers::{
  create_word, delete_word, get_word, list_words, liveness, readiness, update_word,
};
use super::state::AppState;

/// Creates the API router
///
/// Liveness and readiness are separate from the word routes; the CORS and
/// trace layers apply to everything.
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(liveness))
    .route("/health", get(readiness))
    .route("/words", get(list_words).post(create_word))
    .route("/words/{category}/{id}", get(get_word).put(update_word).delete(delete_word))
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// CORS layer restricting cross-origin access to the fixed allow-list.
///
/// Requests carrying no Origin header (curl, mobile clients) are unaffected.
fn cors_layer() -> CorsLayer {
  let origins: Vec<HeaderValue> =
    ALLOWED_ORIGINS.into_iter().map(HeaderValue::from_static).collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
    .allow_headers([CONTENT_TYPE])
    .allow_credentials(true)
}

/// Starts the server and blocks until shutdown
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error when the listener cannot bind or the server fails.
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("server is running on {}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  tracing::info!("server shutdown complete");
  Ok(())
}

/// Resolves when a shutdown signal arrives (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
  use tokio::signal;

  let ctrl_c = async {
    signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("failed to install SIGTERM handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
    _ = terminate => tracing::info!("received SIGTERM, shutting down"),
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;

  use banglish::bson::Document;
  use banglish::errors::StoreResult;
  use banglish::{MutationReceipt, WordEntry, WordStore};

  use super::*;
  use crate::config::Config;

  /// Dummy store for router construction (never touches a database)
  struct DummyStore;

  #[async_trait]
  impl WordStore for DummyStore {
    async fn add_word(&self, _: &str, _: &str, _: &str) -> StoreResult<MutationReceipt> {
      Ok(MutationReceipt { matched_count: 0, modified_count: 0, upserted_id: None })
    }

    async fn list_categories(&self) -> StoreResult<Vec<Document>> {
      Ok(Vec::new())
    }

    async fn find_word(&self, category: &str, id: &str) -> StoreResult<WordEntry> {
      Err(banglish::StoreError::word_not_found(category, id))
    }

    async fn update_word(&self, _: &str, _: &str, _: &str, _: &str) -> StoreResult<()> {
      Ok(())
    }

    async fn move_word(&self, _: &str, _: &str, _: &str, _: &str, _: &str) -> StoreResult<()> {
      Ok(())
    }

    async fn remove_word(&self, _: &str, _: &str) -> StoreResult<()> {
      Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
      Ok(())
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      port: 5001,
      db_user: "user".to_string(),
      db_pass: "pass".to_string(),
      db_host: "cluster0.example.mongodb.net".to_string(),
      db_name: "bd_DB".to_string(),
    };

    AppState::new(config, Arc::new(DummyStore))
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // Router construction must not panic (static origins parse as headers)
  }
}
