//! In-memory implementation of the read repositories.

use std::sync::Arc;

use auditdesk_core::error::AuditDeskResult;
use auditdesk_core::models::{
    access_log::AccessLog, alert::SecurityAlert, audit::AuditEvent,
    classification::DataClassificationRule, export::ExportRequest, ip_policy::IpPolicy,
    lifecycle::LifecycleEvent, session::Session,
};
use auditdesk_core::query::{
    AccessLogFilter, AuditEventFilter, LifecycleEventFilter, SecurityAlertFilter, SessionFilter,
    filter_access_logs, filter_audit_events, filter_lifecycle_events, filter_security_alerts,
    filter_sessions,
};
use auditdesk_core::repository::{
    AccessLogRepository, AuditEventRepository, ClassificationRuleRepository,
    ExportRequestRepository, IpPolicyRepository, LifecycleEventRepository,
    SecurityAlertRepository, SessionRepository,
};
use tracing::info;

use crate::dataset::{Dataset, SEED_DATASET};
use crate::error::StoreError;

/// Read-only store over an immutable [`Dataset`].
///
/// Cloning is cheap; clones share the same dataset.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    data: Arc<Dataset>,
}

impl MemoryStore {
    /// Build a store from the bundled dataset.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_json(SEED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Self::from_dataset(Dataset::from_json(json)?)
    }

    /// Validate `dataset` and freeze it.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        dataset.validate()?;

        info!(
            audit_events = dataset.audit_events.len(),
            lifecycle_events = dataset.lifecycle_events.len(),
            access_logs = dataset.access_logs.len(),
            security_alerts = dataset.security_alerts.len(),
            sessions = dataset.sessions.len(),
            "Event store loaded"
        );

        Ok(Self {
            data: Arc::new(dataset),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }
}

impl AuditEventRepository for MemoryStore {
    async fn list_audit_events(
        &self,
        filter: AuditEventFilter,
    ) -> AuditDeskResult<Vec<AuditEvent>> {
        Ok(filter_audit_events(&self.data.audit_events, &filter)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get_audit_event(&self, id: &str) -> AuditDeskResult<AuditEvent> {
        self.data
            .audit_events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "audit_event".into(),
                    id: id.to_string(),
                }
                .into()
            })
    }
}

impl LifecycleEventRepository for MemoryStore {
    async fn list_lifecycle_events(
        &self,
        filter: LifecycleEventFilter,
    ) -> AuditDeskResult<Vec<LifecycleEvent>> {
        Ok(filter_lifecycle_events(&self.data.lifecycle_events, &filter)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl AccessLogRepository for MemoryStore {
    async fn list_access_logs(&self, filter: AccessLogFilter) -> AuditDeskResult<Vec<AccessLog>> {
        Ok(filter_access_logs(&self.data.access_logs, &filter)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl SecurityAlertRepository for MemoryStore {
    async fn list_security_alerts(
        &self,
        filter: SecurityAlertFilter,
    ) -> AuditDeskResult<Vec<SecurityAlert>> {
        Ok(filter_security_alerts(&self.data.security_alerts, &filter)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl SessionRepository for MemoryStore {
    async fn list_sessions(&self, filter: SessionFilter) -> AuditDeskResult<Vec<Session>> {
        Ok(filter_sessions(&self.data.sessions, &filter)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl IpPolicyRepository for MemoryStore {
    async fn list_ip_policies(&self) -> AuditDeskResult<Vec<IpPolicy>> {
        Ok(self.data.ip_policies.clone())
    }
}

impl ExportRequestRepository for MemoryStore {
    async fn list_export_requests(&self) -> AuditDeskResult<Vec<ExportRequest>> {
        let mut requests = self.data.export_requests.clone();
        requests.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        Ok(requests)
    }
}

impl ClassificationRuleRepository for MemoryStore {
    async fn list_classification_rules(&self) -> AuditDeskResult<Vec<DataClassificationRule>> {
        Ok(self.data.classification_rules.clone())
    }
}
