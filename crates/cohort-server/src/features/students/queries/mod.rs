pub mod get;
pub mod list;
pub mod list_by_cohort;

pub use get::{GetStudentError, GetStudentQuery};
pub use list::ListStudentsError;
pub use list_by_cohort::{ListStudentsByCohortError, ListStudentsByCohortQuery};
