//! Models module

mod model_definition;

pub use model_definition::{CategoryDocument, MutationReceipt, WordEntry, new_word_id};
