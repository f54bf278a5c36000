//! Live MongoDB integration tests
//!
//! Round-trips store operations through a real deployment. Opt-in via the
//! `with_db_tests` feature with `MONGODB_URI` pointing at a replica set
//! (category moves run in a transaction, which standalone servers do not
//! support):
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017/?replicaSet=rs0 \
//!   cargo test -p banglish --features with_db_tests
//! ```

use banglish::models::new_word_id;
use banglish::{MongoWordStore, WordStore};

const TEST_DB: &str = "banglish_test";
const TEST_COLLECTION: &str = "words";

async fn connect() -> MongoWordStore {
  let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set for live tests");
  MongoWordStore::connect(&uri, TEST_DB, TEST_COLLECTION)
    .await
    .expect("failed to connect: check test environment")
}

/// Unique category name per test run so runs do not interfere.
fn fresh_category(label: &str) -> String {
  format!("{label}-{}", new_word_id())
}

#[tokio::test]
#[cfg_attr(not(feature = "with_db_tests"), ignore)]
async fn add_creates_category_lazily_and_appends() {
  let store = connect().await;
  let category = fresh_category("greetings");

  // First insert upserts a fresh category document
  let first = store.add_word(&category, "hello", "greeting").await.expect("add should succeed");
  assert_eq!(first.matched_count, 0);
  assert!(first.upserted_id.is_some());

  // Second insert appends to the existing array
  let second = store.add_word(&category, "bhalo", "good").await.expect("add should succeed");
  assert_eq!(second.matched_count, 1);
  assert_eq!(second.modified_count, 1);
  assert!(second.upserted_id.is_none());
}

#[tokio::test]
#[cfg_attr(not(feature = "with_db_tests"), ignore)]
async fn stored_word_round_trips_through_find_update_move_delete() {
  let store = connect().await;
  let category = fresh_category("verbs");
  let new_category = fresh_category("adjectives");

  store.add_word(&category, "khawa", "to eat").await.expect("add should succeed");

  // The receipt does not echo the id; recover it from the listing
  let listing = store.list_categories().await.expect("list should succeed");
  let id = listing
    .iter()
    .filter_map(|raw| raw.get_str("name").ok().zip(raw.get_array("words").ok()))
    .find(|(name, _)| *name == category)
    .and_then(|(_, words)| words.first())
    .and_then(|entry| entry.as_document())
    .and_then(|entry| entry.get_str("id").ok())
    .map(str::to_string)
    .expect("created word should appear in the listing");

  let found = store.find_word(&category, &id).await.expect("find should succeed");
  assert_eq!(found.word, "khawa");
  assert_eq!(found.meaning, "to eat");

  store.update_word(&category, &id, "khaoa", "to eat (rev)").await.expect("update should succeed");
  let updated = store.find_word(&category, &id).await.expect("find should succeed");
  assert_eq!(updated.word, "khaoa");
  assert_eq!(updated.id, id);

  store
    .move_word(&category, &new_category, &id, "khaoa", "to eat (moved)")
    .await
    .expect("move should succeed");
  assert!(store.find_word(&category, &id).await.is_err());
  let moved = store.find_word(&new_category, &id).await.expect("find should succeed");
  assert_eq!(moved.id, id);

  store.remove_word(&new_category, &id).await.expect("delete should succeed");
  let gone = store.find_word(&new_category, &id).await;
  assert!(gone.expect_err("find after delete should fail").is_not_found());
}

#[tokio::test]
#[cfg_attr(not(feature = "with_db_tests"), ignore)]
async fn operations_on_unknown_words_report_not_found() {
  let store = connect().await;
  let category = fresh_category("ghosts");
  let id = new_word_id();

  assert!(store.find_word(&category, &id).await.expect_err("should fail").is_not_found());
  assert!(
    store.update_word(&category, &id, "x", "y").await.expect_err("should fail").is_not_found()
  );
  assert!(
    store
      .move_word(&category, "elsewhere", &id, "x", "y")
      .await
      .expect_err("should fail")
      .is_not_found()
  );
  assert!(store.remove_word(&category, &id).await.expect_err("should fail").is_not_found());
}
