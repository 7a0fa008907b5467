pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateStudentCommand, CreateStudentError, DeleteStudentCommand, DeleteStudentError,
    UpdateStudentCommand, UpdateStudentError,
};

pub use queries::{
    GetStudentError, GetStudentQuery, ListStudentsByCohortError, ListStudentsByCohortQuery,
    ListStudentsError,
};

pub use routes::students_routes;
