//! Store-specific error types and conversions.

use auditdesk_core::error::AuditDeskError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("Invalid record: {0}")]
    Invalid(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<StoreError> for AuditDeskError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => AuditDeskError::not_found(&entity, id),
            StoreError::DuplicateId { collection, id } => AuditDeskError::AlreadyExists {
                entity: collection.into(),
                id,
            },
            other => AuditDeskError::Integrity(other.to_string()),
        }
    }
}
