//! Delete cohort command
//!
//! Removes the cohort and returns the removed document. Students keep
//! their reference; reads resolve it to null from then on.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{self, Collection, StoreError};

/// Command to delete a cohort
#[derive(Debug, Clone)]
pub struct DeleteCohortCommand {
    pub id: Uuid,
}

/// Errors that can occur when deleting a cohort
#[derive(Debug, thiserror::Error)]
pub enum DeleteCohortError {
    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

/// Handler function for deleting cohorts
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    command: DeleteCohortCommand,
) -> Result<Value, DeleteCohortError> {
    let removed = Collection::new(pool, store::COHORTS)
        .delete(command.id)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(msg) => DeleteCohortError::NotFound(msg),
            other => DeleteCohortError::Store(other),
        })?;

    tracing::info!(cohort_id = %removed.id, "Cohort deleted");

    Ok(removed.into_json())
}
