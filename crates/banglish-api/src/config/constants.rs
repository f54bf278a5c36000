//! API configuration constants

/// Default listening port.
///
/// Overridden by the `PORT` environment variable.
pub const DEFAULT_PORT: u16 = 5000;

/// Default database name.
pub const DEFAULT_DB_NAME: &str = "bd_DB";

/// Collection holding the category documents.
pub const WORDS_COLLECTION: &str = "words";

/// Query options appended to every connection URI.
pub const URI_OPTIONS: &str = "retryWrites=true&w=majority";

/// Origins allowed to make cross-origin requests.
///
/// Requests without an Origin header (curl, mobile clients) are not subject
/// to this list.
pub const ALLOWED_ORIGINS: [&str; 3] = [
  "http://localhost:5173",
  "https://bangla-hub.web.app",
  "https://bangla-hub.firebaseapp.com",
];
