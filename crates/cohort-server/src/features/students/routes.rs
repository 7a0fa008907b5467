//! Student API routes
//!
//! Wires the student commands and queries to Axum HTTP handlers:
//!
//! - `POST /api/students` - Create a new student
//! - `GET /api/students` - List all students (cohort resolved)
//! - `GET /api/students/:id` - Get a single student (cohort resolved)
//! - `GET /api/students/cohort/:cohortId` - List students of one cohort
//! - `PUT /api/students/:id` - Update a student
//! - `DELETE /api/students/:id` - Delete a student (204, no body)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;
use sqlx::PgPool;

use crate::api::response::error_response;
use crate::features::shared::parse_document_id;
use crate::schema::ValidationError;

use super::{
    commands::{
        CreateStudentCommand, CreateStudentError, DeleteStudentCommand, DeleteStudentError,
        UpdateStudentCommand, UpdateStudentError,
    },
    queries::{
        GetStudentError, GetStudentQuery, ListStudentsByCohortError, ListStudentsByCohortQuery,
        ListStudentsError,
    },
};

/// Creates the students router with all routes configured
pub fn students_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_student))
        .route("/", get(list_students))
        .route("/cohort/:cohort_id", get(list_students_by_cohort))
        .route("/:id", get(get_student))
        .route("/:id", put(update_student))
        .route("/:id", delete(delete_student))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /api/students` - 201 with the stored document.
#[tracing::instrument(skip(pool, body))]
async fn create_student(
    State(pool): State<PgPool>,
    Json(body): Json<Value>,
) -> Result<Response, StudentApiError> {
    let command = CreateStudentCommand { fields: body };
    let student = super::commands::create::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(student)).into_response())
}

/// `PUT /api/students/:id` - 200 with the updated document.
#[tracing::instrument(skip(pool, body), fields(id = %id))]
async fn update_student(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, StudentApiError> {
    let id = parse_document_id("Student", &id).map_err(StudentApiError::InvalidId)?;

    let command = UpdateStudentCommand { id, fields: body };
    let student = super::commands::update::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(student)).into_response())
}

/// `DELETE /api/students/:id` - 204 with an empty body.
#[tracing::instrument(skip(pool), fields(id = %id))]
async fn delete_student(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, StudentApiError> {
    let id = parse_document_id("Student", &id).map_err(StudentApiError::InvalidId)?;

    super::commands::delete::handle(pool, DeleteStudentCommand { id }).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// `GET /api/students` - 200 with the full list, cohorts resolved.
#[tracing::instrument(skip(pool))]
async fn list_students(State(pool): State<PgPool>) -> Result<Response, StudentApiError> {
    let students = super::queries::list::handle(pool).await?;

    Ok((StatusCode::OK, Json(students)).into_response())
}

/// `GET /api/students/:id` - 200 with the document, cohort resolved.
#[tracing::instrument(skip(pool), fields(id = %id))]
async fn get_student(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, StudentApiError> {
    let id = parse_document_id("Student", &id).map_err(StudentApiError::InvalidId)?;

    let student = super::queries::get::handle(pool, GetStudentQuery { id }).await?;

    Ok((StatusCode::OK, Json(student)).into_response())
}

/// `GET /api/students/cohort/:cohortId` - 200 with the matching students.
#[tracing::instrument(skip(pool), fields(cohort_id = %cohort_id))]
async fn list_students_by_cohort(
    State(pool): State<PgPool>,
    Path(cohort_id): Path<String>,
) -> Result<Response, StudentApiError> {
    let cohort_id = parse_document_id("Cohort", &cohort_id).map_err(StudentApiError::InvalidId)?;

    let query = ListStudentsByCohortQuery { cohort_id };
    let students = super::queries::list_by_cohort::handle(pool, query).await?;

    Ok((StatusCode::OK, Json(students)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for student API endpoints
#[derive(Debug)]
enum StudentApiError {
    InvalidId(String),
    Create(CreateStudentError),
    Update(UpdateStudentError),
    Delete(DeleteStudentError),
    Get(GetStudentError),
    List(ListStudentsError),
    ListByCohort(ListStudentsByCohortError),
}

impl From<CreateStudentError> for StudentApiError {
    fn from(err: CreateStudentError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateStudentError> for StudentApiError {
    fn from(err: UpdateStudentError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteStudentError> for StudentApiError {
    fn from(err: DeleteStudentError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetStudentError> for StudentApiError {
    fn from(err: GetStudentError) -> Self {
        Self::Get(err)
    }
}

impl From<ListStudentsError> for StudentApiError {
    fn from(err: ListStudentsError) -> Self {
        Self::List(err)
    }
}

impl From<ListStudentsByCohortError> for StudentApiError {
    fn from(err: ListStudentsByCohortError) -> Self {
        Self::ListByCohort(err)
    }
}

impl IntoResponse for StudentApiError {
    fn into_response(self) -> Response {
        match self {
            StudentApiError::InvalidId(message) => {
                error_response(StatusCode::BAD_REQUEST, message)
            }

            StudentApiError::Create(CreateStudentError::Validation(ref err)) => {
                validation_response(err)
            }
            StudentApiError::Create(CreateStudentError::Store(_)) => {
                tracing::error!("Store error during student creation: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create student")
            }

            StudentApiError::Update(UpdateStudentError::Validation(ref err)) => {
                validation_response(err)
            }
            StudentApiError::Update(UpdateStudentError::NotFound(message)) => {
                error_response(StatusCode::NOT_FOUND, message)
            }
            StudentApiError::Update(UpdateStudentError::Store(_)) => {
                tracing::error!("Store error during student update: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update student")
            }

            StudentApiError::Delete(DeleteStudentError::NotFound(message)) => {
                error_response(StatusCode::NOT_FOUND, message)
            }
            StudentApiError::Delete(DeleteStudentError::Store(_)) => {
                tracing::error!("Store error during student deletion: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete student")
            }

            StudentApiError::Get(GetStudentError::NotFound(message)) => {
                error_response(StatusCode::NOT_FOUND, message)
            }
            StudentApiError::Get(GetStudentError::Store(_)) => {
                tracing::error!("Store error during student retrieval: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve student")
            }

            StudentApiError::List(ListStudentsError::Store(_)) => {
                tracing::error!("Store error during student listing: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve students")
            }

            StudentApiError::ListByCohort(ListStudentsByCohortError::Store(_)) => {
                tracing::error!("Store error during student listing by cohort: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve students")
            }
        }
    }
}

fn validation_response(err: &ValidationError) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

impl std::fmt::Display for StudentApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(msg) => write!(f, "{}", msg),
            Self::Create(e) => write!(f, "{}", e),
            Self::Update(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
            Self::ListByCohort(e) => write!(f, "{}", e),
        }
    }
}
