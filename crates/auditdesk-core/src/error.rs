//! Error types for the AuditDesk system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditDeskError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity} with id {id}")]
    AlreadyExists { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Data integrity violation: {0}")]
    Integrity(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuditDeskError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

pub type AuditDeskResult<T> = Result<T, AuditDeskError>;
