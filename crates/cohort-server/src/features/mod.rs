//! Feature modules implementing the cohort-tools API
//!
//! Each entity is a vertical slice with its own commands (write
//! operations), queries (read operations), and routes:
//!
//! - **cohorts**: CRUD over the cohorts collection
//! - **students**: CRUD over the students collection, with the cohort
//!   reference resolved on reads
//!
//! Commands and queries are standalone async handler functions taking the
//! pool plus a command/query value; routes translate their outcomes into
//! HTTP responses.

pub mod cohorts;
pub mod shared;
pub mod students;

use axum::Router;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// PostgreSQL connection pool backing the document collections
    pub db: sqlx::PgPool,
}

/// Creates the API router with both feature slices mounted
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/cohorts", cohorts::cohorts_routes().with_state(state.db.clone()))
        .nest("/students", students::students_routes().with_state(state.db.clone()))
}
