//! API State Definition

use std::sync::Arc;

use banglish::WordStore;

use crate::config::Config;

/// Application State
///
/// State shared across the entire server: configuration and the word store.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Word store
  ///
  /// - Production: `Arc::new(MongoWordStore::connect(...).await?)`
  /// - Test: `Arc::new(StubWordStore::default())`
  pub store: Arc<dyn WordStore>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, store: Arc<dyn WordStore>) -> Self {
    Self { config, store }
  }
}
