//! MongoDB-backed job store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Database};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::StoreSettings;
use crate::error::StoreError;

use super::types::{FieldMatch, JobRecord, JOB_COLLECTION};
use super::JobStore;

/// Job store reading from a MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoJobStore {
    db: Database,
}

impl MongoJobStore {
    /// Create a client for the configured database.
    ///
    /// Parses the connection string (including SRV lookups) but does not wait
    /// for a server; connectivity problems surface on the first query.
    pub async fn connect(settings: &StoreSettings) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&settings.url).await?;
        let db = client.database(&settings.database);
        debug!(database = %settings.database, "MongoDB client created");
        Ok(Self { db })
    }

    /// Wrap an existing database handle.
    pub fn from_database(db: Database) -> Self {
        Self { db }
    }
}

/// `{"$or": [{field: {"$regex": .., "$options": "i"}}, ..]}`, or `{}` without clauses.
pub fn build_query(clauses: &[FieldMatch]) -> Document {
    if clauses.is_empty() {
        return Document::new();
    }

    let filters: Vec<Bson> = clauses
        .iter()
        .map(|clause| {
            let mut filter = Document::new();
            filter.insert(
                clause.field,
                doc! { "$regex": clause.pattern(), "$options": "i" },
            );
            Bson::Document(filter)
        })
        .collect();

    doc! { "$or": filters }
}

fn into_record(document: Document) -> Result<JobRecord, StoreError> {
    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Malformed(format!("expected object, got {}", other))),
    }
}

#[async_trait]
impl JobStore for MongoJobStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    #[instrument(skip(self, clauses), fields(clauses = clauses.len()))]
    async fn find_jobs(
        &self,
        clauses: &[FieldMatch],
        limit: usize,
    ) -> Result<Vec<JobRecord>, StoreError> {
        let query = build_query(clauses);
        debug!(?query, "Querying job collection");

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let cursor = self
            .db
            .collection::<Document>(JOB_COLLECTION)
            .find(query)
            .limit(limit)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents.into_iter().map(into_record).collect()
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names().await?)
    }
}
