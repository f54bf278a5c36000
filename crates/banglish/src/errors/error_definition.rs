//! Store error definition

use thiserror::Error;

/// Errors produced by the word store.
///
/// Not-found is an error variant rather than an `Option` so that every store
/// operation has a uniform `StoreResult` signature and the API layer can map
/// it to a 404 in one place.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
  /// The driver reported an error (connection, query, transaction).
  #[error("database error: {0}")]
  Database(#[from] mongodb::error::Error),

  /// A stored document did not match the category schema.
  #[error("malformed category document: {0}")]
  Deserialize(#[from] mongodb::bson::de::Error),

  /// No entry with the given id exists in the given category's array.
  #[error("word not found: category={category}, id={id}")]
  WordNotFound {
    /// Category named in the request.
    category: String,
    /// Word id named in the request.
    id: String,
  },
}

impl StoreError {
  /// Creates the not-found error.
  #[must_use]
  pub fn word_not_found(category: impl Into<String>, id: impl Into<String>) -> Self {
    Self::WordNotFound { category: category.into(), id: id.into() }
  }

  /// True when the error is the not-found case.
  #[must_use]
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::WordNotFound { .. })
  }
}

/// Standard result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_not_found_display_names_category_and_id() {
    let err = StoreError::word_not_found("greetings", "abc123");
    let rendered = err.to_string();
    assert!(rendered.contains("greetings"));
    assert!(rendered.contains("abc123"));
  }

  #[test]
  fn word_not_found_is_not_found() {
    let err = StoreError::word_not_found("greetings", "abc123");
    assert!(err.is_not_found());
  }
}
