//! Cohort collection schema

use serde_json::json;

use super::{DocumentSchema, FieldSpec};

/// Programs a cohort can teach.
pub const PROGRAMS: &[&str] = &["Web Dev", "UX/UI", "Data Analytics", "Cybersecurity"];

/// Schedule formats.
pub const FORMATS: &[&str] = &["Full Time", "Part Time"];

/// Campuses, including the remote one.
pub const CAMPUSES: &[&str] = &[
    "Madrid",
    "Barcelona",
    "Miami",
    "Paris",
    "Berlin",
    "Amsterdam",
    "Lisbon",
    "Remote",
];

/// Default total hours for a cohort.
pub const DEFAULT_TOTAL_HOURS: u32 = 360;

/// Constraint set for the `cohorts` collection.
pub fn schema() -> DocumentSchema {
    DocumentSchema::new()
        .field(FieldSpec::text("cohortSlug").required())
        .field(FieldSpec::text("cohortName").required())
        .field(FieldSpec::text("program").allowed(PROGRAMS))
        .field(FieldSpec::text("format").allowed(FORMATS))
        .field(FieldSpec::text("campus").allowed(CAMPUSES))
        .field(FieldSpec::date("startDate").default_now())
        .field(FieldSpec::date("endDate"))
        .field(FieldSpec::boolean("inProgress").default_value(json!(false)))
        .field(FieldSpec::text("programManager").required())
        .field(FieldSpec::text("leadTeacher").required())
        .field(FieldSpec::number("totalHours").default_value(json!(DEFAULT_TOTAL_HOURS)))
}
