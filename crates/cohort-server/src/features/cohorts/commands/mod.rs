pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateCohortCommand, CreateCohortError};
pub use delete::{DeleteCohortCommand, DeleteCohortError};
pub use update::{UpdateCohortCommand, UpdateCohortError};
