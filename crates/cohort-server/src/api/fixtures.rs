//! Static demo endpoints
//!
//! `/docs`, `/cohorts`, and `/students` serve fixtures embedded at compile
//! time. They are demo material for the frontend and are not store-backed.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const DOCS_HTML: &str = include_str!("../../views/docs.html");
const COHORTS_JSON: &str = include_str!("../../fixtures/cohorts.json");
const STUDENTS_JSON: &str = include_str!("../../fixtures/students.json");

/// `GET /docs` - static documentation page
pub async fn docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}

/// `GET /cohorts` - static demo cohort list
pub async fn cohorts() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], COHORTS_JSON)
}

/// `GET /students` - static demo student list
pub async fn students() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], STUDENTS_JSON)
}
