//! Update student command

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::schema::{self, ValidationError};
use crate::store::{self, Collection, StoreError};

/// Command to update an existing student
#[derive(Debug, Clone)]
pub struct UpdateStudentCommand {
    pub id: Uuid,
    pub fields: Value,
}

/// Errors that can occur when updating a student
#[derive(Debug, thiserror::Error)]
pub enum UpdateStudentError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

/// Handler function for updating students
#[tracing::instrument(skip(pool, command), fields(student_id = %command.id))]
pub async fn handle(
    pool: PgPool,
    command: UpdateStudentCommand,
) -> Result<Value, UpdateStudentError> {
    schema::student::schema().validate_partial(&command.fields)?;

    let updated = Collection::new(pool, store::STUDENTS)
        .update(command.id, command.fields)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(msg) => UpdateStudentError::NotFound(msg),
            other => UpdateStudentError::Store(other),
        })?;

    tracing::info!(student_id = %updated.id, "Student updated");

    Ok(updated.into_json())
}
