//! Cohort API routes
//!
//! Wires the cohort commands and queries to Axum HTTP handlers:
//!
//! - `POST /api/cohorts` - Create a new cohort
//! - `GET /api/cohorts` - List all cohorts
//! - `GET /api/cohorts/:id` - Get a single cohort
//! - `PUT /api/cohorts/:id` - Update a cohort
//! - `DELETE /api/cohorts/:id` - Delete a cohort (returns the removed document)

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
        CreateCohortCommand, CreateCohortError, DeleteCohortCommand, DeleteCohortError,
        UpdateCohortCommand, UpdateCohortError,
    },
    queries::{GetCohortError, GetCohortQuery, ListCohortsError},
};

/// Creates the cohorts router with all routes configured
pub fn cohorts_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_cohort))
        .route("/", get(list_cohorts))
        .route("/:id", get(get_cohort))
        .route("/:id", put(update_cohort))
        .route("/:id", delete(delete_cohort))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /api/cohorts` - 201 with the stored document, 400 on a schema
/// violation, 500 on a store failure.
#[tracing::instrument(skip(pool, body))]
async fn create_cohort(
    State(pool): State<PgPool>,
    Json(body): Json<Value>,
) -> Result<Response, CohortApiError> {
    let command = CreateCohortCommand { fields: body };
    let cohort = super::commands::create::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(cohort)).into_response())
}

/// `PUT /api/cohorts/:id` - 200 with the updated document.
#[tracing::instrument(skip(pool, body), fields(id = %id))]
async fn update_cohort(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, CohortApiError> {
    let id = parse_document_id("Cohort", &id).map_err(CohortApiError::InvalidId)?;

    let command = UpdateCohortCommand { id, fields: body };
    let cohort = super::commands::update::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(cohort)).into_response())
}

/// `DELETE /api/cohorts/:id` - 200 with the removed document.
#[tracing::instrument(skip(pool), fields(id = %id))]
async fn delete_cohort(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, CohortApiError> {
    let id = parse_document_id("Cohort", &id).map_err(CohortApiError::InvalidId)?;

    let command = DeleteCohortCommand { id };
    let removed = super::commands::delete::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(removed)).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// `GET /api/cohorts` - 200 with the full list.
#[tracing::instrument(skip(pool))]
async fn list_cohorts(State(pool): State<PgPool>) -> Result<Response, CohortApiError> {
    let cohorts = super::queries::list::handle(pool).await?;

    Ok((StatusCode::OK, Json(cohorts)).into_response())
}

/// `GET /api/cohorts/:id` - 200 with the document, 404 when absent.
#[tracing::instrument(skip(pool), fields(id = %id))]
async fn get_cohort(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, CohortApiError> {
    let id = parse_document_id("Cohort", &id).map_err(CohortApiError::InvalidId)?;

    let cohort = super::queries::get::handle(pool, GetCohortQuery { id }).await?;

    Ok((StatusCode::OK, Json(cohort)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for cohort API endpoints
#[derive(Debug)]
enum CohortApiError {
    InvalidId(String),
    Create(CreateCohortError),
    Update(UpdateCohortError),
    Delete(DeleteCohortError),
    Get(GetCohortError),
    List(ListCohortsError),
}

impl From<CreateCohortError> for CohortApiError {
    fn from(err: CreateCohortError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateCohortError> for CohortApiError {
    fn from(err: UpdateCohortError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteCohortError> for CohortApiError {
    fn from(err: DeleteCohortError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetCohortError> for CohortApiError {
    fn from(err: GetCohortError) -> Self {
        Self::Get(err)
    }
}

impl From<ListCohortsError> for CohortApiError {
    fn from(err: ListCohortsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for CohortApiError {
    fn into_response(self) -> Response {
        match self {
            CohortApiError::InvalidId(message) => {
                error_response(StatusCode::BAD_REQUEST, message)
            }

            CohortApiError::Create(CreateCohortError::Validation(ref err)) => {
                validation_response(err)
            }
            CohortApiError::Create(CreateCohortError::Store(_)) => {
                tracing::error!("Store error during cohort creation: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create cohort")
            }

            CohortApiError::Update(UpdateCohortError::Validation(ref err)) => {
                validation_response(err)
            }
            CohortApiError::Update(UpdateCohortError::NotFound(message)) => {
                error_response(StatusCode::NOT_FOUND, message)
            }
            CohortApiError::Update(UpdateCohortError::Store(_)) => {
                tracing::error!("Store error during cohort update: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update cohort")
            }

            CohortApiError::Delete(DeleteCohortError::NotFound(message)) => {
                error_response(StatusCode::NOT_FOUND, message)
            }
            CohortApiError::Delete(DeleteCohortError::Store(_)) => {
                tracing::error!("Store error during cohort deletion: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete cohort")
            }

            CohortApiError::Get(GetCohortError::NotFound(message)) => {
                error_response(StatusCode::NOT_FOUND, message)
            }
            CohortApiError::Get(GetCohortError::Store(_)) => {
                tracing::error!("Store error during cohort retrieval: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve cohort")
            }

            CohortApiError::List(ListCohortsError::Store(_)) => {
                tracing::error!("Store error during cohort listing: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve cohorts")
            }
        }
    }
}

fn validation_response(err: &ValidationError) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

impl std::fmt::Display for CohortApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(msg) => write!(f, "{}", msg),
            Self::Create(e) => write!(f, "{}", e),
            Self::Update(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
        }
    }
}
