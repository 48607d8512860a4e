//! Secondary course source backed by the document table.

use crate::domain::catalog::StaticCatalog;
use crate::domain::course::CourseRecord;
use crate::domain::resolve::{CourseSource, SourceError};
use crate::infra::config;
use crate::storage::documents::postgres::{PostgresDocumentStore, StoredDocument};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of copying the bundled catalog into the store.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub written: usize,
    /// Keys of records that could not be written.
    pub failed: Vec<String>,
}

fn classify(e: sqlx::Error) -> SourceError {
    match &e {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => SourceError::Format(e.to_string()),
        _ => SourceError::Transport(e.to_string()),
    }
}

/// Turns a stored document into a record. Documents that omit `id` inherit the row key.
pub fn decode_document(stored: StoredDocument) -> Result<CourseRecord, SourceError> {
    let mut record: CourseRecord = serde_json::from_value(stored.document).map_err(|e| {
        SourceError::Format(format!("Invalid course document {}: {}", stored.id, e))
    })?;
    if record.id.is_none() {
        record.id = Some(stored.id);
    }
    Ok(record)
}

/// Keyed reads the secondary lookup needs from a document backend.
#[async_trait]
pub trait DocumentLookup: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<StoredDocument>, sqlx::Error>;
    async fn first_by_slug(&self, slug: &str) -> Result<Option<StoredDocument>, sqlx::Error>;
}

#[async_trait]
impl DocumentLookup for PostgresDocumentStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<StoredDocument>, sqlx::Error> {
        PostgresDocumentStore::get_by_id(self, id).await
    }

    async fn first_by_slug(&self, slug: &str) -> Result<Option<StoredDocument>, sqlx::Error> {
        PostgresDocumentStore::first_by_slug(self, slug).await
    }
}

/// Primary-key read, then a slug query, as one operation. An error from either read
/// ends the lookup.
pub async fn lookup_course(
    documents: &dyn DocumentLookup,
    identifier: &str,
) -> Result<Option<CourseRecord>, SourceError> {
    if identifier.trim().is_empty() {
        return Ok(None);
    }

    let stored = match documents.get_by_id(identifier).await.map_err(classify)? {
        Some(doc) => Some(doc),
        None => {
            debug!(identifier, "No document keyed by identifier; trying slug");
            documents.first_by_slug(identifier).await.map_err(classify)?
        }
    };

    stored.map(decode_document).transpose()
}

#[derive(Clone)]
pub struct SecondaryCourseStore {
    documents: PostgresDocumentStore,
}

impl SecondaryCourseStore {
    pub fn new(documents: PostgresDocumentStore) -> Self {
        Self { documents }
    }

    /// Builds a lazily-connecting store from `DATABASE_URL`; `None` when unset.
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        match config::database_url() {
            Some(url) => Ok(Some(Self::new(PostgresDocumentStore::connect_lazy(&url)?))),
            None => Ok(None),
        }
    }

    pub fn documents(&self) -> &PostgresDocumentStore {
        &self.documents
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        self.documents.ensure_schema().await?;
        Ok(())
    }

    pub async fn upsert_record(&self, record: &CourseRecord) -> anyhow::Result<()> {
        let key = record
            .key()
            .ok_or_else(|| anyhow::anyhow!("Cannot store a course without id or slug"))?;
        let document = serde_json::to_value(record)?;
        self.documents
            .upsert(key, record.slug.as_deref(), &document)
            .await?;
        Ok(())
    }

    /// Upserts every bundled course. Individual failures are logged and reported, not raised.
    pub async fn seed_from_catalog(&self, catalog: &StaticCatalog) -> SeedReport {
        let mut report = SeedReport::default();
        for record in catalog.list() {
            let key = record.key().unwrap_or_default().to_string();
            match self.upsert_record(record).await {
                Ok(()) => report.written += 1,
                Err(e) => {
                    warn!(key = key.as_str(), error = %e, "Failed to seed course document");
                    report.failed.push(key);
                }
            }
        }
        report
    }
}

#[async_trait]
impl CourseSource for SecondaryCourseStore {
    fn name(&self) -> &str {
        "document-store"
    }

    async fn fetch(&self, identifier: &str) -> Result<Option<CourseRecord>, SourceError> {
        lookup_course(&self.documents, identifier).await
    }
}
