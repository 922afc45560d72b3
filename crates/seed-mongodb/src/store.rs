//! Document store operations over the `sales` database.
//!
//! A thin, typed layer over [`mongodb::Database`]: find-by-filter,
//! upsert-by-key, bulk insert, delete-by-filter, and index declaration.
//! Collection names are passed by the pipeline from
//! [`seed_core::collections`].

use crate::error::SeedError;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Build the update document for an upsert: everything under `$set`
/// except `created_at`, which moves to `$setOnInsert` so reruns never
/// reset it on existing rows.
fn upsert_update(mut doc: Document) -> Document {
    match doc.remove("created_at") {
        Some(created_at) => doc! {
            "$set": doc,
            "$setOnInsert": { "created_at": created_at },
        },
        None => doc! { "$set": doc },
    }
}

/// Handle to the sales document store.
pub struct SeedStore {
    database: Database,
}

impl SeedStore {
    /// Connect to MongoDB and select `database_name`.
    ///
    /// Connect and server-selection timeouts are capped at 10s so a
    /// missing server fails the run instead of hanging it.
    pub async fn connect(connection_string: &str, database_name: &str) -> Result<Self, SeedError> {
        let mut options = ClientOptions::parse(connection_string).await?;
        options.connect_timeout = Some(Duration::from_secs(10));
        options.server_selection_timeout = Some(Duration::from_secs(10));

        let client = Client::with_options(options)?;
        Ok(Self {
            database: client.database(database_name),
        })
    }

    /// Wrap an existing database handle (used by tests).
    pub fn with_database(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Upsert one document by its natural key.
    ///
    /// Sets `created_at` only on first insert and refreshes everything
    /// else, including `updated_at`, on every run.
    pub async fn upsert_one<T: Serialize>(
        &self,
        collection: &str,
        key: Document,
        item: &T,
    ) -> Result<(), SeedError> {
        let document = bson::to_document(item)?;
        self.database
            .collection::<Document>(collection)
            .update_one(key, upsert_update(document))
            .upsert(true)
            .await?;
        Ok(())
    }

    /// Upsert a batch of documents keyed by `key_field`.
    pub async fn upsert_many<T: Serialize>(
        &self,
        collection: &str,
        key_field: &str,
        items: &[T],
    ) -> Result<u64, SeedError> {
        for item in items {
            let document = bson::to_document(item)?;
            let key_value = document.get(key_field).cloned().ok_or_else(|| {
                SeedError::MissingKey {
                    collection: collection.to_string(),
                    field: key_field.to_string(),
                }
            })?;
            let key = doc! { key_field: key_value };
            self.database
                .collection::<Document>(collection)
                .update_one(key, upsert_update(document))
                .upsert(true)
                .await?;
        }
        debug!("Upserted {} documents into '{}'", items.len(), collection);
        Ok(items.len() as u64)
    }

    /// Insert a batch of documents in one bulk write.
    pub async fn insert_many<T>(&self, collection: &str, items: &[T]) -> Result<u64, SeedError>
    where
        T: Serialize + Send + Sync,
    {
        if items.is_empty() {
            return Ok(0);
        }
        let result = self
            .database
            .collection::<T>(collection)
            .insert_many(items)
            .await?;
        Ok(result.inserted_ids.len() as u64)
    }

    /// Load every document matching `filter`, deserialized as `T`.
    pub async fn find_all<T>(&self, collection: &str, filter: Document) -> Result<Vec<T>, SeedError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let cursor = self.database.collection::<T>(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Delete every document matching `filter`; returns the count removed.
    pub async fn delete_all(&self, collection: &str, filter: Document) -> Result<u64, SeedError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .delete_many(filter)
            .await?;
        Ok(result.deleted_count)
    }

    /// Number of documents in a collection.
    pub async fn count(&self, collection: &str) -> Result<u64, SeedError> {
        Ok(self
            .database
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await?)
    }

    /// Declare indexes on a collection, creating any that are missing.
    pub async fn create_indexes(
        &self,
        collection: &str,
        indexes: Vec<IndexModel>,
    ) -> Result<(), SeedError> {
        self.database
            .collection::<Document>(collection)
            .create_indexes(indexes)
            .await?;
        Ok(())
    }
}

/// Index declarations for the `orders` collection: unique order id plus
/// the two lookup paths (by customer and by line-item product, both most
/// recent first).
pub fn order_indexes() -> Vec<IndexModel> {
    vec![
        IndexModel::builder()
            .keys(doc! { "order_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build(),
        IndexModel::builder()
            .keys(doc! { "customer_id": 1, "order_date": -1 })
            .build(),
        IndexModel::builder()
            .keys(doc! { "line_items.product_id": 1, "order_date": -1 })
            .build(),
    ]
}
