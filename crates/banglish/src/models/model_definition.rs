//! Data Model Definition

use mongodb::bson::Bson;
use mongodb::results::UpdateResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a word id: 16 random bytes rendered as 32 lowercase hex characters.
///
/// Uniqueness is probabilistic (random), not enforced by the store.
#[must_use]
pub fn new_word_id() -> String {
  Uuid::new_v4().as_simple().to_string()
}

/// A single dictionary entry.
///
/// Owned by exactly one category array at a time. The `id` is the only
/// stable handle for update and delete once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
  /// Process-generated random identifier, see [`new_word_id`].
  pub id: String,

  /// The word itself.
  pub word: String,

  /// Its meaning.
  pub meaning: String,
}

impl WordEntry {
  /// Creates an entry with a freshly generated id.
  #[must_use]
  pub fn generate(word: impl Into<String>, meaning: impl Into<String>) -> Self {
    Self::with_id(new_word_id(), word, meaning)
  }

  /// Creates an entry that keeps an existing id.
  ///
  /// Category moves rebuild the entry in the destination array with the id
  /// it already carries.
  #[must_use]
  pub fn with_id(
    id: impl Into<String>,
    word: impl Into<String>,
    meaning: impl Into<String>,
  ) -> Self {
    Self { id: id.into(), word: word.into(), meaning: meaning.into() }
  }
}

/// A category document as stored in the words collection.
///
/// One document per category name, created lazily on first insertion.
/// `words` is the ordered array of entries belonging to the category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDocument {
  /// Category name.
  pub name: String,

  /// Entries owned by this category, in insertion order.
  #[serde(default)]
  pub words: Vec<WordEntry>,
}

/// Raw outcome of a store mutation, mirroring the driver's update result.
///
/// The create endpoint responds with this receipt rather than the created
/// entity; callers infer success from the counts. Field names serialize in
/// camelCase, the way the driver reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationReceipt {
  /// Number of category documents matched by the filter.
  pub matched_count: u64,

  /// Number of category documents actually modified.
  pub modified_count: u64,

  /// Id of the category document created by an upsert, if any.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub upserted_id: Option<String>,
}

impl From<UpdateResult> for MutationReceipt {
  fn from(result: UpdateResult) -> Self {
    Self {
      matched_count: result.matched_count,
      modified_count: result.modified_count,
      upserted_id: result.upserted_id.as_ref().map(bson_id_string),
    }
  }
}

/// Renders an upserted `_id` for the receipt.
///
/// Object ids become their hex form; anything else falls back to the BSON
/// display rendering.
fn bson_id_string(id: &Bson) -> String {
  match id {
    Bson::ObjectId(oid) => oid.to_hex(),
    other => other.to_string(),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
