//! banglish-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banglish::MongoWordStore;
use banglish_api::ApiError;
use banglish_api::api::{AppState, run_server};
use banglish_api::config::{Config, WORDS_COLLECTION};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // A .env file is optional; real environments set the variables directly
  dotenvy::dotenv().ok();

  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  let config = Config::from_env()?;
  tracing::info!(port = config.port, db = %config.db_name, "configuration loaded");

  // Connect and ping before binding the listener, so bad credentials fail
  // at startup instead of on the first request
  let store = MongoWordStore::connect(&config.connection_uri(), &config.db_name, WORDS_COLLECTION)
    .await
    .map_err(|e| ApiError::config(format!("failed to connect to MongoDB: {e}")))?;
  tracing::info!("word store initialized");

  let state = AppState::new(config, Arc::new(store));

  run_server(state).await
}
