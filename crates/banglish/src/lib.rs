//! banglish word-store library
//!
//! Category-grouped dictionary word storage backed by MongoDB. One document
//! per category holds the ordered array of word entries; entries are created
//! on insert, rewritten in place, moved between category arrays, or pulled
//! out on delete. A word's process-generated id is its only stable handle.

/// Error module - StoreError and StoreResult
pub mod errors;

/// Data model module - WordEntry, CategoryDocument, MutationReceipt
pub mod models;

/// Store module - WordStore trait, MongoDB implementation, query builders
pub mod store;

/// Re-export of the driver's BSON module (documents, `doc!`)
pub use mongodb::bson;

/// Re-exports
pub use errors::{StoreError, StoreResult};
pub use models::{CategoryDocument, MutationReceipt, WordEntry};
pub use store::{MongoWordStore, WordStore};
