//! API error definition

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// The requested entity does not exist
  NotFound,
  /// Internal error (database or handler failure)
  Internal,
  /// Startup configuration error
  Config,
}

impl ApiErrorKind {
  /// HTTP status code for the kind
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
///
/// The client-facing message is carried verbatim; internal causes are
/// logged at the call site and never reach the wire.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The requested entity does not exist
  #[error("{0}")]
  NotFound(String),

  /// Internal error, reported to the caller as a generic string
  #[error("{0}")]
  Internal(String),

  /// Startup configuration error (never surfaces on a request path)
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::NotFound(_) => ApiErrorKind::NotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a not-found error
  #[must_use]
  pub fn not_found(message: impl Into<String>) -> Self {
    Self::NotFound(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// Wire shape of every error response: `{"error": "<message>"}`
#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorBody { error: self.to_string() };

    (status, Json(body)).into_response()
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_found_creation() {
    let err = ApiError::not_found("Word not found");
    assert_eq!(err.kind(), ApiErrorKind::NotFound);
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "Word not found");
  }

  #[test]
  fn internal_creation() {
    let err = ApiError::internal("Failed to add word");
    assert_eq!(err.kind(), ApiErrorKind::Internal);
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.to_string(), "Failed to add word");
  }

  #[test]
  fn config_creation() {
    let err = ApiError::config("DB_USER is not set");
    assert_eq!(err.kind(), ApiErrorKind::Config);
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().contains("DB_USER"));
  }
}
