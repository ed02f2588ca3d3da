//! Security alert domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum AlertType {
        BruteForce => ("brute_force", "Brute Force Attempt"),
        UnusualLocation => ("unusual_location", "Unusual Location"),
        PrivilegeEscalation => ("privilege_escalation", "Privilege Escalation"),
        MassExport => ("mass_export", "Mass Data Export"),
        AfterHoursAccess => ("after_hours_access", "After-Hours Access"),
        ConcurrentSessions => ("concurrent_sessions", "Concurrent Sessions"),
    }
}

labeled_enum! {
    /// Alert severity, ordered from least to most severe.
    #[derive(PartialOrd, Ord)]
    pub enum AlertSeverity {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
        Critical => ("critical", "Critical"),
    }
}

labeled_enum! {
    pub enum AlertStatus {
        Open => ("open", "Open"),
        Investigating => ("investigating", "Investigating"),
        Resolved => ("resolved", "Resolved"),
        Dismissed => ("dismissed", "Dismissed"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityAlert {
    pub id: String,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub description: String,
    pub user_id: Option<String>,
    pub ip_address: Option<String>,
    pub detected_at: DateTime<Utc>,
    /// Audit event ids that triggered this alert.
    #[serde(default)]
    pub related_event_ids: Vec<String>,
}

impl SecurityAlert {
    /// Open or under investigation.
    pub fn is_active(&self) -> bool {
        matches!(self.status, AlertStatus::Open | AlertStatus::Investigating)
    }
}
