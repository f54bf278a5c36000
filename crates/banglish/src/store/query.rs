//! BSON filter and update builders for the words collection.
//!
//! Every query shape the store issues is built here as a pure function, so
//! the exact documents sent to the server are unit-testable without a live
//! deployment.

use mongodb::bson::{Document, doc};

use crate::models::WordEntry;

/// Field holding the category name.
pub const FIELD_NAME: &str = "name";

/// Field holding the category's word array.
pub const FIELD_WORDS: &str = "words";

/// Filter matching a category document by name.
#[must_use]
pub fn category_filter(category: &str) -> Document {
  doc! { FIELD_NAME: category }
}

/// Filter matching the category document whose array contains `id`.
///
/// Both parts must hold together: a correct id under the wrong category
/// matches nothing.
#[must_use]
pub fn word_filter(category: &str, id: &str) -> Document {
  doc! { FIELD_NAME: category, FIELD_WORDS: { "$elemMatch": { "id": id } } }
}

/// `$push` update appending an entry to the category array.
#[must_use]
pub fn push_word(entry: &WordEntry) -> Document {
  doc! {
    "$push": {
      FIELD_WORDS: { "id": &entry.id, "word": &entry.word, "meaning": &entry.meaning }
    }
  }
}

/// `$pull` update removing the entry with `id` from the category array.
#[must_use]
pub fn pull_word(id: &str) -> Document {
  doc! { "$pull": { FIELD_WORDS: { "id": id } } }
}

/// Positional `$set` update rewriting `word` and `meaning` on the array
/// element bound by [`word_id_array_filter`].
#[must_use]
pub fn set_word_fields(word: &str, meaning: &str) -> Document {
  doc! { "$set": { "words.$[elem].word": word, "words.$[elem].meaning": meaning } }
}

/// Array filter binding `$[elem]` to the entry with `id`.
#[must_use]
pub fn word_id_array_filter(id: &str) -> Document {
  doc! { "elem.id": id }
}

/// The ping command round-tripped by the readiness probe.
#[must_use]
pub fn ping_command() -> Document {
  doc! { "ping": 1 }
}
