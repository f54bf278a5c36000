//! Word store trait and MongoDB implementation

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::Document;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion, UpdateOptions};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::errors::{StoreError, StoreResult};
use crate::models::{CategoryDocument, MutationReceipt, WordEntry};

use super::query;

/// Database pinged by the readiness probe.
const ADMIN_DB: &str = "admin";

/// Common interface for the category-grouped word store.
///
/// This trait allows swapping the production implementation
/// ([`MongoWordStore`]) with test stubs/mocks in the HTTP layer.
#[async_trait]
pub trait WordStore: Send + Sync {
  /// Appends a freshly created entry to `category`, creating the category
  /// document when absent.
  ///
  /// Returns the raw mutation receipt, not the created entity.
  ///
  /// # Errors
  /// Database failure.
  async fn add_word(
    &self,
    category: &str,
    word: &str,
    meaning: &str,
  ) -> StoreResult<MutationReceipt>;

  /// Every category document, verbatim as the driver delivers it.
  ///
  /// # Errors
  /// Database failure.
  async fn list_categories(&self) -> StoreResult<Vec<Document>>;

  /// The entry with `id` inside `category`'s array.
  ///
  /// # Errors
  /// Not-found when no category document matches both parts; database
  /// failure otherwise.
  async fn find_word(&self, category: &str, id: &str) -> StoreResult<WordEntry>;

  /// Rewrites `word` and `meaning` on the entry in place.
  ///
  /// # Errors
  /// Not-found when nothing matched; database failure otherwise.
  async fn update_word(
    &self,
    category: &str,
    id: &str,
    word: &str,
    meaning: &str,
  ) -> StoreResult<()>;

  /// Moves the entry from `category` to `new_category`, preserving its id
  /// and rewriting `word` and `meaning`.
  ///
  /// The destination category document is created when absent; the entry
  /// itself must exist in the source category.
  ///
  /// # Errors
  /// Not-found when the id is absent from the source category; database
  /// failure otherwise.
  async fn move_word(
    &self,
    category: &str,
    new_category: &str,
    id: &str,
    word: &str,
    meaning: &str,
  ) -> StoreResult<()>;

  /// Removes the entry with `id` from `category`'s array.
  ///
  /// # Errors
  /// Not-found when nothing was modified; database failure otherwise.
  async fn remove_word(&self, category: &str, id: &str) -> StoreResult<()>;

  /// Round-trips a ping through the deployment.
  ///
  /// # Errors
  /// Database failure.
  async fn ping(&self) -> StoreResult<()>;
}

/// Production store backed by a MongoDB collection.
///
/// One document per category: `{ name, words: [...] }`. A single client is
/// acquired at process start and reused for the process lifetime.
/// Per-document atomicity comes from the server; category moves run inside
/// a multi-document transaction.
#[derive(Clone)]
pub struct MongoWordStore {
  client: Client,
  collection: Collection<Document>,
}

impl MongoWordStore {
  /// Connects to the deployment and pings it before returning, so a bad
  /// configuration fails at startup rather than on the first request.
  ///
  /// The client is configured with Stable API v1 in strict mode.
  ///
  /// # Errors
  /// Returns an error when the URI does not parse or the deployment is
  /// unreachable.
  pub async fn connect(uri: &str, db_name: &str, collection_name: &str) -> StoreResult<Self> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_api = Some(
      ServerApi::builder()
        .version(ServerApiVersion::V1)
        .strict(true)
        .deprecation_errors(true)
        .build(),
    );

    let client = Client::with_options(options)?;
    let collection = client.database(db_name).collection::<Document>(collection_name);

    let store = Self { client, collection };
    store.ping().await?;
    info!(db = db_name, collection = collection_name, "connected to MongoDB");

    Ok(store)
  }
}

#[async_trait]
impl WordStore for MongoWordStore {
  async fn add_word(
    &self,
    category: &str,
    word: &str,
    meaning: &str,
  ) -> StoreResult<MutationReceipt> {
    let entry = WordEntry::generate(word, meaning);
    debug!(category, id = %entry.id, "appending word");

    // Upsert makes lazy category creation a single atomic operation
    let options = UpdateOptions::builder().upsert(true).build();
    let result = self
      .collection
      .update_one(query::category_filter(category), query::push_word(&entry), options)
      .await?;

    Ok(MutationReceipt::from(result))
  }

  async fn list_categories(&self) -> StoreResult<Vec<Document>> {
    let cursor = self.collection.find(None, None).await?;
    let categories = cursor.try_collect().await?;
    Ok(categories)
  }

  async fn find_word(&self, category: &str, id: &str) -> StoreResult<WordEntry> {
    let found = self.collection.find_one(query::word_filter(category, id), None).await?;

    let Some(raw) = found else {
      return Err(StoreError::word_not_found(category, id));
    };

    // The filter guarantees the id is in the array; scan it for the entry
    let document: CategoryDocument = mongodb::bson::from_document(raw)?;
    document
      .words
      .into_iter()
      .find(|entry| entry.id == id)
      .ok_or_else(|| StoreError::word_not_found(category, id))
  }

  async fn update_word(
    &self,
    category: &str,
    id: &str,
    word: &str,
    meaning: &str,
  ) -> StoreResult<()> {
    let options =
      UpdateOptions::builder().array_filters(vec![query::word_id_array_filter(id)]).build();

    let result = self
      .collection
      .update_one(query::word_filter(category, id), query::set_word_fields(word, meaning), options)
      .await?;

    if result.matched_count == 0 {
      return Err(StoreError::word_not_found(category, id));
    }

    debug!(category, id, "word updated in place");
    Ok(())
  }

  async fn move_word(
    &self,
    category: &str,
    new_category: &str,
    id: &str,
    word: &str,
    meaning: &str,
  ) -> StoreResult<()> {
    let mut session = self.client.start_session(None).await?;
    session.start_transaction(None).await?;

    let pulled = self
      .collection
      .update_one_with_session(
        query::word_filter(category, id),
        query::pull_word(id),
        None,
        &mut session,
      )
      .await;

    let pulled = match pulled {
      Ok(result) => result,
      Err(err) => {
        session.abort_transaction().await.ok();
        return Err(err.into());
      }
    };

    // Upsert applies to the destination category document, never to the
    // entry: a missing id aborts instead of materializing a word
    if pulled.modified_count == 0 {
      session.abort_transaction().await?;
      return Err(StoreError::word_not_found(category, id));
    }

    let entry = WordEntry::with_id(id, word, meaning);
    let options = UpdateOptions::builder().upsert(true).build();
    let pushed = self
      .collection
      .update_one_with_session(
        query::category_filter(new_category),
        query::push_word(&entry),
        options,
        &mut session,
      )
      .await;

    if let Err(err) = pushed {
      session.abort_transaction().await.ok();
      return Err(err.into());
    }

    session.commit_transaction().await?;
    debug!(id, from = category, to = new_category, "word moved");
    Ok(())
  }

  async fn remove_word(&self, category: &str, id: &str) -> StoreResult<()> {
    let result = self
      .collection
      .update_one(query::category_filter(category), query::pull_word(id), None)
      .await?;

    if result.modified_count == 0 {
      return Err(StoreError::word_not_found(category, id));
    }

    debug!(category, id, "word deleted");
    Ok(())
  }

  async fn ping(&self) -> StoreResult<()> {
    self.client.database(ADMIN_DB).run_command(query::ping_command(), None).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_store_is_object_safe() {
    // The HTTP layer holds the store as Arc<dyn WordStore>
    fn assert_dyn(_store: &dyn WordStore) {}
    let _ = assert_dyn;
  }
}
