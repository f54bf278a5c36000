//! HTTP handler definitions

use axum::{
  Json,
  extract::{Path, State},
};
use tracing::{debug, error, info};

use banglish::bson::Document;
use banglish::{MutationReceipt, StoreError, WordEntry};

use crate::errors::ApiError;
use crate::models::{
  CreateWordRequest, DeleteWordResponse, UpdateWordRequest, UpdateWordResponse, UpdatedWord,
};

use super::state::AppState;

/// Client-facing 404 message, shared by every word route.
const WORD_NOT_FOUND: &str = "Word not found";

/// Maps a store failure to the route-specific client-facing error.
///
/// Not-found passes through as 404; anything else is logged with its cause
/// and swallowed into the generic `context` string.
fn store_error(err: StoreError, context: &'static str) -> ApiError {
  if err.is_not_found() {
    return ApiError::not_found(WORD_NOT_FOUND);
  }
  error!(error = %err, context, "store operation failed");
  ApiError::internal(context)
}

/// `POST /words`
///
/// Appends a new entry to the named category, creating the category
/// document when absent. Responds with the raw mutation receipt; callers
/// infer success from the counts.
///
/// # Response
/// - 200 OK: mutation receipt
/// - 500 Internal Server Error: `{"error": "Failed to add word"}`
pub async fn create_word(
  State(state): State<AppState>,
  Json(request): Json<CreateWordRequest>,
) -> Result<Json<MutationReceipt>, ApiError> {
  debug!(category = %request.category, word = %request.word, "create word request");

  let receipt = state
    .store
    .add_word(&request.category, &request.word, &request.meaning)
    .await
    .map_err(|err| store_error(err, "Failed to add word"))?;

  info!(category = %request.category, "word added");
  Ok(Json(receipt))
}

/// `GET /words`
///
/// Every category document verbatim, as delivered by the driver. No
/// filtering, pagination, or projection.
pub async fn list_words(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
  let categories = state
    .store
    .list_categories()
    .await
    .map_err(|err| store_error(err, "Failed to retrieve words"))?;

  debug!(count = categories.len(), "category documents listed");
  Ok(Json(categories))
}

/// `GET /words/{category}/{id}`
///
/// One word entry. Category and id must both be correct together.
///
/// # Response
/// - 200 OK: `{id, word, meaning}`
/// - 404 Not Found: `{"error": "Word not found"}`
pub async fn get_word(
  State(state): State<AppState>,
  Path((category, id)): Path<(String, String)>,
) -> Result<Json<WordEntry>, ApiError> {
  let entry = state
    .store
    .find_word(&category, &id)
    .await
    .map_err(|err| store_error(err, "Failed to retrieve word"))?;

  Ok(Json(entry))
}

/// `PUT /words/{category}/{id}`
///
/// Two branches: a `newCategory` different from the path category moves
/// the entry into that category (id preserved, destination created when
/// absent); otherwise `word`/`meaning` are rewritten in place.
///
/// # Response
/// - 200 OK: `{success, message, updatedWord}`
/// - 404 Not Found: `{"error": "Word not found"}`
pub async fn update_word(
  State(state): State<AppState>,
  Path((category, id)): Path<(String, String)>,
  Json(request): Json<UpdateWordRequest>,
) -> Result<Json<UpdateWordResponse>, ApiError> {
  let UpdateWordRequest { word, meaning, new_category } = request;

  match new_category {
    Some(new_category) if new_category != category => {
      state
        .store
        .move_word(&category, &new_category, &id, &word, &meaning)
        .await
        .map_err(|err| store_error(err, "Failed to update word"))?;

      info!(id = %id, from = %category, to = %new_category, "word moved");
      Ok(Json(UpdateWordResponse {
        success: true,
        message: "Word updated and category changed successfully".to_string(),
        updated_word: UpdatedWord { word, meaning, category: new_category },
      }))
    }
    _ => {
      state
        .store
        .update_word(&category, &id, &word, &meaning)
        .await
        .map_err(|err| store_error(err, "Failed to update word"))?;

      info!(id = %id, category = %category, "word updated");
      Ok(Json(UpdateWordResponse {
        success: true,
        message: "Word updated successfully".to_string(),
        updated_word: UpdatedWord { word, meaning, category },
      }))
    }
  }
}

/// `DELETE /words/{category}/{id}`
///
/// Pulls the matching-id entry from the named category's array.
///
/// # Response
/// - 200 OK: `{success, message}`
/// - 404 Not Found: `{"error": "Word not found"}`
pub async fn delete_word(
  State(state): State<AppState>,
  Path((category, id)): Path<(String, String)>,
) -> Result<Json<DeleteWordResponse>, ApiError> {
  state
    .store
    .remove_word(&category, &id)
    .await
    .map_err(|err| store_error(err, "Failed to delete word"))?;

  info!(id = %id, category = %category, "word deleted");
  Ok(Json(DeleteWordResponse {
    success: true,
    message: "Word deleted successfully".to_string(),
  }))
}

/// `GET /`
///
/// Plain-text liveness string.
pub async fn liveness() -> &'static str {
  "banglish dictionary server is running"
}

/// `GET /health`
///
/// Readiness probe, separate from the business routes: round-trips a ping
/// through the database.
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str, ApiError> {
  state.store.ping().await.map_err(|err| store_error(err, "Database unreachable"))?;
  Ok("OK")
}
