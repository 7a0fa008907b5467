//! Create cohort command
//!
//! Validates the candidate document against the cohort schema (required
//! fields, enum membership, defaults) and persists it.

use serde_json::Value;
use sqlx::PgPool;

use crate::schema::{self, ValidationError};
use crate::store::{self, Collection, StoreError};

/// Command to create a new cohort
///
/// `fields` is the raw JSON body; the schema decides what is acceptable.
#[derive(Debug, Clone)]
pub struct CreateCohortCommand {
    pub fields: Value,
}

/// Errors that can occur when creating a cohort
#[derive(Debug, thiserror::Error)]
pub enum CreateCohortError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Handler function for creating cohorts
///
/// Returns the stored document, including the assigned identifier and any
/// defaulted fields.
#[tracing::instrument(skip(pool, command))]
pub async fn handle(
    pool: PgPool,
    command: CreateCohortCommand,
) -> Result<Value, CreateCohortError> {
    let doc = schema::cohort::schema().validate_new(command.fields)?;

    let stored = Collection::new(pool, store::COHORTS).insert(doc).await?;

    tracing::info!(cohort_id = %stored.id, "Cohort created");

    Ok(stored.into_json())
}
