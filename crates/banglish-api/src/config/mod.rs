//! Config module

mod constants;
mod env;

pub use constants::{ALLOWED_ORIGINS, DEFAULT_DB_NAME, DEFAULT_PORT, URI_OPTIONS, WORDS_COLLECTION};
pub use env::Config;
