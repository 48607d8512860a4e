//! Course document table in PostgreSQL.

use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

/// A stored course document together with its primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub document: JsonValue,
}

fn row_to_document(row: PgRow) -> Result<StoredDocument, sqlx::Error> {
    Ok(StoredDocument {
        id: row.try_get("id")?,
        document: row.try_get("document")?,
    })
}

/// Raw access to `course_documents` over a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a lazily-connecting pool; nothing touches the network until the first query.
    pub fn connect_lazy(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS course_documents (
                id TEXT PRIMARY KEY,
                slug TEXT,
                document JSONB NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS course_documents_slug_idx ON course_documents (slug)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<StoredDocument>, sqlx::Error> {
        let row = sqlx::query("SELECT id, document FROM course_documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_document).transpose()
    }

    /// First document (by id) whose slug equals `slug`.
    pub async fn first_by_slug(&self, slug: &str) -> Result<Option<StoredDocument>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT id, document FROM course_documents WHERE slug = $1 ORDER BY id LIMIT 1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        row.map(row_to_document).transpose()
    }

    pub async fn upsert(
        &self,
        id: &str,
        slug: Option<&str>,
        document: &JsonValue,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO course_documents (id, slug, document, updated_at) VALUES ($1, $2, $3, now())
             ON CONFLICT (id) DO UPDATE SET slug = $2, document = $3, updated_at = now()",
        )
        .bind(id)
        .bind(slug)
        .bind(document)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
