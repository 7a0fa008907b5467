pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateCohortCommand, CreateCohortError, DeleteCohortCommand, DeleteCohortError,
    UpdateCohortCommand, UpdateCohortError,
};

pub use queries::{GetCohortError, GetCohortQuery, ListCohortsError};

pub use routes::cohorts_routes;
