//! Document store access
//!
//! Collections are PostgreSQL tables of `(id UUID, doc JSONB)` rows. The
//! operations here are uniform across entities; schema validation happens
//! in the command/query layer before anything reaches a collection.
//!
//! Queries are built at runtime because documents are schema-flexible:
//! there is no fixed column set to verify against. Table names come from
//! the fixed constants below, never from request input.

use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// Table backing the cohorts collection.
pub const COHORTS: &str = "cohorts";

/// Table backing the students collection.
pub const STUDENTS: &str = "students";

/// Store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Requested document does not exist
    #[error("{0}")]
    NotFound(String),

    /// Query or connection failure
    #[error("Store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl StoreError {
    /// Create a not found error with collection context
    pub fn not_found(collection: &str, id: Uuid) -> Self {
        Self::NotFound(format!("No document '{}' in {}", id, collection))
    }
}

/// A stored document: assigned identifier plus its JSON fields.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub fields: Value,
}

impl Document {
    /// The external JSON representation: the fields with `id` merged in.
    pub fn into_json(self) -> Value {
        let mut doc = self.fields;
        if let Value::Object(ref mut map) = doc {
            map.insert("id".to_string(), Value::String(self.id.to_string()));
        }
        doc
    }
}

impl From<(Uuid, Value)> for Document {
    fn from((id, fields): (Uuid, Value)) -> Self {
        Self { id, fields }
    }
}

/// Handle to one document collection.
#[derive(Clone)]
pub struct Collection {
    pool: PgPool,
    table: &'static str,
}

impl Collection {
    pub fn new(pool: PgPool, table: &'static str) -> Self {
        Self { pool, table }
    }

    /// Persist a new document and return it with its assigned identifier.
    #[tracing::instrument(skip(self, doc), fields(collection = self.table))]
    pub async fn insert(&self, doc: Value) -> Result<Document, StoreError> {
        let sql = format!("INSERT INTO {} (doc) VALUES ($1) RETURNING id, doc", self.table);
        let row: (Uuid, Value) = sqlx::query_as(&sql).bind(&doc).fetch_one(&self.pool).await?;

        tracing::debug!(id = %row.0, "Document inserted");
        Ok(row.into())
    }

    /// All documents in the collection, in store-native order.
    #[tracing::instrument(skip(self), fields(collection = self.table))]
    pub async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        let sql = format!("SELECT id, doc FROM {}", self.table);
        let rows: Vec<(Uuid, Value)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    /// The document with the given identifier.
    #[tracing::instrument(skip(self), fields(collection = self.table))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Document, StoreError> {
        let sql = format!("SELECT id, doc FROM {} WHERE id = $1", self.table);
        let row: Option<(Uuid, Value)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Document::from)
            .ok_or_else(|| StoreError::not_found(self.table, id))
    }

    /// All documents whose `field` holds the given scalar value.
    #[tracing::instrument(skip(self), fields(collection = self.table))]
    pub async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<Document>, StoreError> {
        let sql = format!(
            "SELECT id, doc FROM {} WHERE doc->>($1::text) = $2",
            self.table
        );
        let rows: Vec<(Uuid, Value)> = sqlx::query_as(&sql)
            .bind(field)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    /// Merge `patch` into the document with the given identifier.
    ///
    /// A shallow field merge: provided fields replace stored ones, other
    /// stored fields survive. Returns the updated document.
    #[tracing::instrument(skip(self, patch), fields(collection = self.table))]
    pub async fn update(&self, id: Uuid, patch: Value) -> Result<Document, StoreError> {
        let sql = format!(
            "UPDATE {} SET doc = doc || $2 WHERE id = $1 RETURNING id, doc",
            self.table
        );
        let row: Option<(Uuid, Value)> = sqlx::query_as(&sql)
            .bind(id)
            .bind(&patch)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Document::from)
            .ok_or_else(|| StoreError::not_found(self.table, id))
    }

    /// Remove the document with the given identifier and return it.
    #[tracing::instrument(skip(self), fields(collection = self.table))]
    pub async fn delete(&self, id: Uuid) -> Result<Document, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING id, doc", self.table);
        let row: Option<(Uuid, Value)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Document::from)
            .ok_or_else(|| StoreError::not_found(self.table, id))
    }

    /// Resolve a reference field in `doc` against this collection.
    ///
    /// Replaces `doc[field]` (a stored identifier string) with the full
    /// referenced document. A dangling or malformed reference resolves to
    /// `null`; an absent field is left absent.
    #[tracing::instrument(skip(self, doc), fields(collection = self.table))]
    pub async fn resolve_into(&self, doc: &mut Value, field: &str) -> Result<(), StoreError> {
        let Some(raw) = doc.get(field).and_then(Value::as_str).map(str::to_owned) else {
            return Ok(());
        };

        let resolved = match raw.parse::<Uuid>() {
            Ok(id) => match self.find_by_id(id).await {
                Ok(referenced) => referenced.into_json(),
                Err(StoreError::NotFound(_)) => {
                    tracing::debug!(reference = %raw, "Dangling reference resolved to null");
                    Value::Null
                }
                Err(err) => return Err(err),
            },
            Err(_) => Value::Null,
        };

        doc[field] = resolved;
        Ok(())
    }
}
