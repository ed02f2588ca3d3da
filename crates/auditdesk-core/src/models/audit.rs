//! Audit event domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuditDeskError, AuditDeskResult};
use crate::models::actor::Actor;
use crate::models::classification::DataClassification;
use crate::models::{LogSource, Outcome};

labeled_enum! {
    pub enum AuditEventType {
        UserLogin => ("user_login", "User Login"),
        UserLogout => ("user_logout", "User Logout"),
        LoginFailed => ("login_failed", "Login Failed"),
        RecordCreated => ("record_created", "Record Created"),
        RecordUpdated => ("record_updated", "Record Updated"),
        RecordDeleted => ("record_deleted", "Record Deleted"),
        ReportDownloaded => ("report_downloaded", "Report Downloaded"),
        PermissionChanged => ("permission_changed", "Permission Changed"),
        RoleAssigned => ("role_assigned", "Role Assigned"),
        ExportRequested => ("export_requested", "Export Requested"),
        ConfigChanged => ("config_changed", "Configuration Changed"),
        SessionRevoked => ("session_revoked", "Session Revoked"),
    }
}

labeled_enum! {
    pub enum AuditAction {
        Create => ("create", "Create"),
        Read => ("read", "Read"),
        Update => ("update", "Update"),
        Delete => ("delete", "Delete"),
        Download => ("download", "Download"),
        Login => ("login", "Login"),
        Logout => ("logout", "Logout"),
        Approve => ("approve", "Approve"),
        Reject => ("reject", "Reject"),
        Export => ("export", "Export"),
        Revoke => ("revoke", "Revoke"),
    }
}

labeled_enum! {
    pub enum TargetType {
        Inspection => ("inspection", "Inspection"),
        Facility => ("facility", "Facility"),
        Report => ("report", "Report"),
        User => ("user", "User"),
        Role => ("role", "Role"),
        Configuration => ("configuration", "Configuration"),
        Session => ("session", "Session"),
        Dataset => ("dataset", "Dataset"),
    }
}

/// What an audit event acted upon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetRef {
    pub target_type: TargetType,
    pub target_id: Option<String>,
}

/// Network and device metadata captured with an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkContext {
    pub ip_address: Option<String>,
    pub device_id: Option<String>,
    pub session_id: Option<String>,
}

/// One immutable record of a system action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditEvent {
    pub id: String,
    pub event_type: AuditEventType,
    pub actor: Actor,
    pub target: TargetRef,
    pub action: AuditAction,
    /// State before the action. Null for creation events by convention.
    #[serde(default)]
    pub before: Option<serde_json::Value>,
    /// State after the action. Null for deletion events by convention.
    #[serde(default)]
    pub after: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub network: NetworkContext,
    pub outcome: Outcome,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
    pub classification: DataClassification,
    #[serde(default)]
    pub source: Option<LogSource>,
}

impl AuditEvent {
    /// Check the invariants a well-formed event must hold.
    ///
    /// A failure reason is only allowed on failed events. Snapshot
    /// conventions are not checked here; see [`AuditEvent::snapshot_convention_breach`].
    pub fn validate(&self) -> AuditDeskResult<()> {
        if self.id.trim().is_empty() {
            return Err(AuditDeskError::Integrity("audit event with empty id".into()));
        }
        if self.failure_reason.is_some() && self.outcome == Outcome::Success {
            return Err(AuditDeskError::Integrity(format!(
                "audit event {} has a failure reason but outcome is success",
                self.id
            )));
        }
        Ok(())
    }

    /// Describe a breach of the before/after snapshot convention, if any.
    pub fn snapshot_convention_breach(&self) -> Option<&'static str> {
        match self.action {
            AuditAction::Create if self.before.is_some() => {
                Some("creation event carries a before snapshot")
            }
            AuditAction::Delete if self.after.is_some() => {
                Some("deletion event carries an after snapshot")
            }
            _ => None,
        }
    }

    pub fn actor_user_id(&self) -> Option<&str> {
        self.actor.user_id.as_deref()
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target.target_id.as_deref()
    }
}
