//! Shared helpers for feature routes

use uuid::Uuid;

/// Parse a path identifier, naming the entity in the error message.
pub fn parse_document_id(entity: &str, raw: &str) -> Result<Uuid, String> {
    raw.parse()
        .map_err(|_| format!("{} id '{}' is not a valid document id", entity, raw))
}
