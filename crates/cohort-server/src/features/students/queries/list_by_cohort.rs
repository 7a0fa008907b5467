//! List students by cohort query
//!
//! Matches students on their stored cohort reference. The reference is
//! resolved in the response; for a deleted cohort the students still match
//! and resolve to null.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{self, Collection, StoreError};

/// Query for the students referencing one cohort
#[derive(Debug, Clone)]
pub struct ListStudentsByCohortQuery {
    pub cohort_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum ListStudentsByCohortError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(pool), fields(cohort_id = %query.cohort_id))]
pub async fn handle(
    pool: PgPool,
    query: ListStudentsByCohortQuery,
) -> Result<Vec<Value>, ListStudentsByCohortError> {
    let students = Collection::new(pool.clone(), store::STUDENTS);
    let cohorts = Collection::new(pool, store::COHORTS);

    let found = students
        .find_by_field("cohort", &query.cohort_id.to_string())
        .await?;

    let mut resolved = Vec::with_capacity(found.len());
    for student in found {
        let mut doc = student.into_json();
        cohorts.resolve_into(&mut doc, "cohort").await?;
        resolved.push(doc);
    }

    tracing::debug!(count = resolved.len(), "Students listed for cohort");

    Ok(resolved)
}
