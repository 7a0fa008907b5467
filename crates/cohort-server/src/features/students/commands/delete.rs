//! Delete student command
//!
//! Unlike cohort deletion, the student route answers 204 with no body, so
//! the removed document is only logged here.

use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{self, Collection, StoreError};

/// Command to delete a student
#[derive(Debug, Clone)]
pub struct DeleteStudentCommand {
    pub id: Uuid,
}

/// Errors that can occur when deleting a student
#[derive(Debug, thiserror::Error)]
pub enum DeleteStudentError {
    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

/// Handler function for deleting students
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: DeleteStudentCommand) -> Result<(), DeleteStudentError> {
    let removed = Collection::new(pool, store::STUDENTS)
        .delete(command.id)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(msg) => DeleteStudentError::NotFound(msg),
            other => DeleteStudentError::Store(other),
        })?;

    tracing::info!(student_id = %removed.id, "Student deleted");

    Ok(())
}
