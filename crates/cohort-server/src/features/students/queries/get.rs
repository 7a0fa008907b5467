//! Get student query
//!
//! The cohort reference is resolved into the full cohort document before
//! the student is returned.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{self, Collection, StoreError};

/// Query for a single student by identifier
#[derive(Debug, Clone)]
pub struct GetStudentQuery {
    pub id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum GetStudentError {
    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetStudentQuery) -> Result<Value, GetStudentError> {
    let students = Collection::new(pool.clone(), store::STUDENTS);
    let cohorts = Collection::new(pool, store::COHORTS);

    let student = students.find_by_id(query.id).await.map_err(|err| match err {
        StoreError::NotFound(msg) => GetStudentError::NotFound(msg),
        other => GetStudentError::Store(other),
    })?;

    let mut doc = student.into_json();
    cohorts
        .resolve_into(&mut doc, "cohort")
        .await
        .map_err(GetStudentError::Store)?;

    Ok(doc)
}
