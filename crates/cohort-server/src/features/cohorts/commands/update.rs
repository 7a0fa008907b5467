//! Update cohort command
//!
//! Applies a partial or full field replacement to an existing cohort.
//! Provided fields must still satisfy the schema's type and enum checks;
//! required-ness is not re-enforced and defaults are not re-applied.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::schema::{self, ValidationError};
use crate::store::{self, Collection, StoreError};

/// Command to update an existing cohort
#[derive(Debug, Clone)]
pub struct UpdateCohortCommand {
    pub id: Uuid,
    pub fields: Value,
}

/// Errors that can occur when updating a cohort
#[derive(Debug, thiserror::Error)]
pub enum UpdateCohortError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

/// Handler function for updating cohorts
#[tracing::instrument(skip(pool, command), fields(cohort_id = %command.id))]
pub async fn handle(
    pool: PgPool,
    command: UpdateCohortCommand,
) -> Result<Value, UpdateCohortError> {
    schema::cohort::schema().validate_partial(&command.fields)?;

    let updated = Collection::new(pool, store::COHORTS)
        .update(command.id, command.fields)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(msg) => UpdateCohortError::NotFound(msg),
            other => UpdateCohortError::Store(other),
        })?;

    tracing::info!(cohort_id = %updated.id, "Cohort updated");

    Ok(updated.into_json())
}
