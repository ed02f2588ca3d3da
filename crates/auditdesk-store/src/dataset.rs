//! The dataset backing the in-memory store.

use std::collections::HashSet;

use auditdesk_core::models::{
    access_log::AccessLog, alert::SecurityAlert, audit::AuditEvent,
    classification::DataClassificationRule, export::ExportRequest, ip_policy::IpPolicy,
    lifecycle::LifecycleEvent, session::Session,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StoreError;

/// Dataset bundled with the binary.
pub const SEED_DATASET: &str = include_str!("../data/dataset.json");

/// Every collection the dashboard reads, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub audit_events: Vec<AuditEvent>,
    pub lifecycle_events: Vec<LifecycleEvent>,
    pub access_logs: Vec<AccessLog>,
    pub security_alerts: Vec<SecurityAlert>,
    pub sessions: Vec<Session>,
    pub ip_policies: Vec<IpPolicy>,
    pub export_requests: Vec<ExportRequest>,
    pub classification_rules: Vec<DataClassificationRule>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check id uniqueness in every collection and the audit event
    /// invariants.
    ///
    /// Snapshot convention breaches (a `before` on a create, an `after`
    /// on a delete) are logged, not rejected.
    pub fn validate(&self) -> Result<(), StoreError> {
        ensure_unique("audit_event", self.audit_events.iter().map(|r| r.id.as_str()))?;
        ensure_unique("lifecycle_event", self.lifecycle_events.iter().map(|r| r.id.as_str()))?;
        ensure_unique("access_log", self.access_logs.iter().map(|r| r.id.as_str()))?;
        ensure_unique("security_alert", self.security_alerts.iter().map(|r| r.id.as_str()))?;
        ensure_unique("session", self.sessions.iter().map(|r| r.id.as_str()))?;
        ensure_unique("ip_policy", self.ip_policies.iter().map(|r| r.id.as_str()))?;
        ensure_unique("export_request", self.export_requests.iter().map(|r| r.id.as_str()))?;
        ensure_unique(
            "classification_rule",
            self.classification_rules.iter().map(|r| r.id.as_str()),
        )?;

        for event in &self.audit_events {
            event
                .validate()
                .map_err(|e| StoreError::Invalid(e.to_string()))?;
            if let Some(breach) = event.snapshot_convention_breach() {
                warn!(event_id = %event.id, breach, "audit event breaks snapshot convention");
            }
        }

        Ok(())
    }
}

fn ensure_unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
