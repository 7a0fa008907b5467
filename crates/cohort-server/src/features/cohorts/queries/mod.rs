pub mod get;
pub mod list;

pub use get::{GetCohortError, GetCohortQuery};
pub use list::ListCohortsError;
