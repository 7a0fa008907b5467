//! List cohorts query
//!
//! Returns every cohort in store-native order; the API does not paginate.

use serde_json::Value;
use sqlx::PgPool;

use crate::store::{self, Collection, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ListCohortsError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<Vec<Value>, ListCohortsError> {
    let cohorts = Collection::new(pool, store::COHORTS).find_all().await?;

    tracing::debug!(count = cohorts.len(), "Cohorts listed");

    Ok(cohorts.into_iter().map(|doc| doc.into_json()).collect())
}
