//! banglish-api crate
//!
//! Web server exposing the banglish dictionary word store as an HTTP API.
//!
//! ## Endpoints
//! - `POST /words` - add a word to a category
//! - `GET /words` - every category document
//! - `GET /words/{category}/{id}` - one word entry
//! - `PUT /words/{category}/{id}` - rewrite in place, or move via `newCategory`
//! - `DELETE /words/{category}/{id}` - remove a word from its category
//! - `GET /` - liveness
//! - `GET /health` - readiness (database ping)
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/words \
//!   -H "Content-Type: application/json" \
//!   -d '{"word": "bhalo", "meaning": "good", "category": "adjectives"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{
  CreateWordRequest, DeleteWordResponse, UpdateWordRequest, UpdateWordResponse, UpdatedWord,
};
