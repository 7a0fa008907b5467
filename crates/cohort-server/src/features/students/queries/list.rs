//! List students query
//!
//! Returns every student with the cohort reference resolved.

use serde_json::Value;
use sqlx::PgPool;

use crate::store::{self, Collection, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ListStudentsError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<Vec<Value>, ListStudentsError> {
    let students = Collection::new(pool.clone(), store::STUDENTS);
    let cohorts = Collection::new(pool, store::COHORTS);

    let found = students.find_all().await?;

    let mut resolved = Vec::with_capacity(found.len());
    for student in found {
        let mut doc = student.into_json();
        cohorts.resolve_into(&mut doc, "cohort").await?;
        resolved.push(doc);
    }

    tracing::debug!(count = resolved.len(), "Students listed");

    Ok(resolved)
}
