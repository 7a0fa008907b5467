//! Create student command
//!
//! The `cohort` reference is validated for shape only; a well-formed id
//! pointing at a deleted cohort is stored as-is and resolves to null on
//! reads.

use serde_json::Value;
use sqlx::PgPool;

use crate::schema::{self, ValidationError};
use crate::store::{self, Collection, StoreError};

/// Command to create a new student
#[derive(Debug, Clone)]
pub struct CreateStudentCommand {
    pub fields: Value,
}

/// Errors that can occur when creating a student
#[derive(Debug, thiserror::Error)]
pub enum CreateStudentError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Handler function for creating students
#[tracing::instrument(skip(pool, command))]
pub async fn handle(
    pool: PgPool,
    command: CreateStudentCommand,
) -> Result<Value, CreateStudentError> {
    let doc = schema::student::schema().validate_new(command.fields)?;

    let stored = Collection::new(pool, store::STUDENTS).insert(doc).await?;

    tracing::info!(student_id = %stored.id, "Student created");

    Ok(stored.into_json())
}
