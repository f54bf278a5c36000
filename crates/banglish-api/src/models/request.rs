//! Request model definition

use serde::Deserialize;

/// Body of `POST /words`.
#[derive(Debug, Deserialize)]
pub struct CreateWordRequest {
  /// The word to store.
  pub word: String,
  /// Its meaning.
  pub meaning: String,
  /// Category the word belongs to.
  pub category: String,
}

/// Body of `PUT /words/{category}/{id}`.
///
/// A `newCategory` that differs from the path category turns the update
/// into a move; otherwise the entry is rewritten in place.
#[derive(Debug, Deserialize)]
pub struct UpdateWordRequest {
  /// Replacement word text.
  pub word: String,
  /// Replacement meaning.
  pub meaning: String,
  /// Destination category when the update is a move.
  #[serde(rename = "newCategory")]
  pub new_category: Option<String>,
}
