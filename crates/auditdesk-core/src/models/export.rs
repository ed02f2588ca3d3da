//! Export governance domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::actor::Actor;
use crate::models::audit::{
    AuditAction, AuditEvent, AuditEventType, NetworkContext, TargetRef, TargetType,
};
use crate::models::classification::DataClassification;
use crate::models::Outcome;
use crate::query::AuditEventFilter;

labeled_enum! {
    pub enum ExportFormat {
        Csv => ("csv", "CSV"),
        Json => ("json", "JSON"),
        Pdf => ("pdf", "PDF"),
    }
}

labeled_enum! {
    pub enum ExportStatus {
        Pending => ("pending", "Pending Review"),
        Approved => ("approved", "Approved"),
        Rejected => ("rejected", "Rejected"),
        Completed => ("completed", "Completed"),
    }
}

/// A previously submitted export request, as reviewed by governance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportRequest {
    pub id: String,
    pub requested_by: String,
    pub role_id: String,
    /// Name of the exported dataset, e.g. `audit_logs`.
    pub dataset: String,
    pub row_count: u64,
    pub format: ExportFormat,
    pub justification: String,
    pub status: ExportStatus,
    pub classification: DataClassification,
    pub requested_at: DateTime<Utc>,
    pub reviewed_by: Option<String>,
}

/// The record emitted when an export intent is accepted.
///
/// Append-only: once handed to an [`ExportRecordSink`](crate::repository::ExportRecordSink)
/// it is never updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportRecord {
    pub id: Uuid,
    pub actor: Actor,
    /// Number of rows in the filtered view at the time of the request.
    pub row_count: u64,
    /// Trimmed justification supplied by the actor.
    pub purpose: String,
    pub format: ExportFormat,
    /// Filter that produced the exported view.
    pub filter: AuditEventFilter,
    /// URL-safe base64 SHA-256 over the exported row ids, in view order.
    pub rows_digest: String,
    pub recorded_at: DateTime<Utc>,
}

impl ExportRecord {
    /// Render this record as an audit event for the external audit pipeline.
    pub fn to_audit_event(&self) -> AuditEvent {
        AuditEvent {
            id: format!("EXP-{}", self.id.simple()),
            event_type: AuditEventType::ExportRequested,
            actor: self.actor.clone(),
            target: TargetRef {
                target_type: TargetType::Dataset,
                target_id: Some("audit_logs".into()),
            },
            action: AuditAction::Export,
            before: None,
            after: Some(serde_json::json!({
                "row_count": self.row_count,
                "purpose": self.purpose,
                "format": self.format,
                "rows_digest": self.rows_digest,
            })),
            timestamp: self.recorded_at,
            network: NetworkContext::default(),
            outcome: Outcome::Success,
            failure_reason: None,
            correlation_id: Some(self.id.to_string()),
            classification: DataClassification::Restricted,
            source: None,
        }
    }
}
