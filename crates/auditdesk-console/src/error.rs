//! Console error types.

use auditdesk_core::error::AuditDeskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("an export justification is required")]
    EmptyJustification,

    #[error("export justification is longer than {max} characters")]
    JustificationTooLong { max: usize },

    #[error("invalid value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}

impl From<ConsoleError> for AuditDeskError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::EmptyJustification | ConsoleError::JustificationTooLong { .. } => {
                AuditDeskError::Validation {
                    message: err.to_string(),
                }
            }
            ConsoleError::InvalidConfig { .. } => AuditDeskError::Config(err.to_string()),
        }
    }
}
