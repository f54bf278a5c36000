//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{
  create_word, delete_word, get_word, list_words, liveness, readiness, update_word,
};
pub use routes::{create_router, run_server};
pub use state::AppState;
