//! Get cohort query

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{self, Collection, StoreError};

/// Query for a single cohort by identifier
#[derive(Debug, Clone)]
pub struct GetCohortQuery {
    pub id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum GetCohortError {
    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetCohortQuery) -> Result<Value, GetCohortError> {
    let cohort = Collection::new(pool, store::COHORTS)
        .find_by_id(query.id)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(msg) => GetCohortError::NotFound(msg),
            other => GetCohortError::Store(other),
        })?;

    Ok(cohort.into_json())
}
