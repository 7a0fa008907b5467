//! Entity schemas
//!
//! Declarative constraint sets for the document collections. A schema lists
//! every known field with its kind, required flag, allowed values, and
//! default; one reusable routine checks a candidate document against the
//! list instead of scattering per-field checks through the handlers.
//!
//! Documents are schema-flexible: fields the schema does not know about are
//! stored as-is.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

pub mod cohort;
pub mod student;

/// What a field value must look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string
    Text,
    /// JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// RFC 3339 date-time string
    Date,
    /// UUID string naming a document in another collection
    Reference,
    /// JSON array of strings
    TextArray,
    /// Any JSON array
    Array,
}

impl FieldKind {
    fn expected(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "RFC 3339 date-time string",
            FieldKind::Reference => "document id string",
            FieldKind::TextArray => "array of strings",
            FieldKind::Array => "array",
        }
    }
}

/// Default applied when a field is omitted at creation
#[derive(Debug, Clone)]
pub enum FieldDefault {
    /// A fixed JSON value
    Value(Value),
    /// The current time, as an RFC 3339 string
    Now,
}

impl FieldDefault {
    fn materialize(&self) -> Value {
        match self {
            FieldDefault::Value(value) => value.clone(),
            FieldDefault::Now => {
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

/// Constraints for a single document field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub allowed: Option<&'static [&'static str]>,
    pub default: Option<FieldDefault>,
}

impl FieldSpec {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            allowed: None,
            default: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn reference(name: &'static str) -> Self {
        Self::new(name, FieldKind::Reference)
    }

    pub fn text_array(name: &'static str) -> Self {
        Self::new(name, FieldKind::TextArray)
    }

    pub fn array(name: &'static str) -> Self {
        Self::new(name, FieldKind::Array)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn allowed(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = Some(values);
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(FieldDefault::Value(value));
        self
    }

    pub fn default_now(mut self) -> Self {
        self.default = Some(FieldDefault::Now);
        self
    }

    /// Check a provided (non-null) value against this spec.
    fn check(&self, value: &Value) -> Result<(), ValidationError> {
        let type_ok = match self.kind {
            FieldKind::Text => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Date => value
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
            FieldKind::Reference => value.as_str().is_some_and(|s| s.parse::<Uuid>().is_ok()),
            FieldKind::TextArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            FieldKind::Array => value.is_array(),
        };

        if !type_ok {
            return Err(ValidationError::WrongType {
                field: self.name.to_string(),
                expected: self.kind.expected(),
            });
        }

        if let Some(allowed) = self.allowed {
            match self.kind {
                FieldKind::TextArray => {
                    // Every element must be a member of the declared set
                    for item in value.as_array().into_iter().flatten() {
                        if let Some(s) = item.as_str() {
                            check_membership(self.name, s, allowed)?;
                        }
                    }
                }
                _ => {
                    if let Some(s) = value.as_str() {
                        check_membership(self.name, s, allowed)?;
                    }
                }
            }
        }

        Ok(())
    }
}

fn check_membership(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.join(", "),
        })
    }
}

/// Constraint set for one collection
#[derive(Debug, Clone, Default)]
pub struct DocumentSchema {
    fields: Vec<FieldSpec>,
}

/// A candidate document failed schema validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Payload must be a JSON object")]
    NotAnObject,

    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' must be a {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("Field '{field}' must be one of [{allowed}], got '{value}'")]
    NotAllowed {
        field: String,
        value: String,
        allowed: String,
    },
}

impl DocumentSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Validate a document for creation.
    ///
    /// Required fields must be present, provided fields must match their
    /// kind and allowed set, and defaults fill omitted fields. Returns the
    /// completed document.
    pub fn validate_new(&self, doc: Value) -> Result<Value, ValidationError> {
        let Value::Object(mut map) = doc else {
            return Err(ValidationError::NotAnObject);
        };

        for spec in &self.fields {
            match map.get(spec.name) {
                None | Some(Value::Null) => {
                    if let Some(ref default) = spec.default {
                        map.insert(spec.name.to_string(), default.materialize());
                    } else if spec.required {
                        return Err(ValidationError::MissingField {
                            field: spec.name.to_string(),
                        });
                    }
                }
                Some(value) => spec.check(value)?,
            }
        }

        Ok(Value::Object(map))
    }

    /// Validate a partial document for update.
    ///
    /// Required-ness is not enforced and defaults are not applied; every
    /// provided field must still match its kind and allowed set.
    pub fn validate_partial(&self, patch: &Value) -> Result<(), ValidationError> {
        let Value::Object(map) = patch else {
            return Err(ValidationError::NotAnObject);
        };

        for spec in &self.fields {
            if let Some(value) = map.get(spec.name) {
                if !value.is_null() {
                    spec.check(value)?;
                }
            }
        }

        Ok(())
    }
}
