//! Student collection schema

use serde_json::json;

use super::{DocumentSchema, FieldSpec};
use crate::schema::cohort::PROGRAMS;

/// Languages a student can declare.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Portuguese",
    "Dutch",
    "Other",
];

/// Default profile image.
pub const DEFAULT_IMAGE: &str = "https://i.imgur.com/r8bo8u7.png";

/// Constraint set for the `students` collection.
///
/// `cohort` is a weak reference: it must be a well-formed document id when
/// provided, but nothing requires the referenced cohort to exist.
pub fn schema() -> DocumentSchema {
    DocumentSchema::new()
        .field(FieldSpec::text("firstName").required())
        .field(FieldSpec::text("lastName").required())
        .field(FieldSpec::text("email").required())
        .field(FieldSpec::text("phone").required())
        .field(FieldSpec::text("linkedinUrl").default_value(json!("")))
        .field(FieldSpec::text_array("languages").allowed(LANGUAGES))
        .field(FieldSpec::text("program").allowed(PROGRAMS))
        .field(FieldSpec::text("background").default_value(json!("")))
        .field(FieldSpec::text("image").default_value(json!(DEFAULT_IMAGE)))
        .field(FieldSpec::reference("cohort"))
        .field(FieldSpec::array("projects").default_value(json!([])))
}
