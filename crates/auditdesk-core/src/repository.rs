//! Repository trait definitions for data access abstraction.
//!
//! The read traits describe the API a real audit backend would expose.
//! All collections are read-only; the only write path is
//! [`ExportRecordSink`], which is append-only.

use crate::error::AuditDeskResult;
use crate::models::{
    access_log::AccessLog,
    alert::SecurityAlert,
    audit::AuditEvent,
    classification::DataClassificationRule,
    export::{ExportRecord, ExportRequest},
    ip_policy::IpPolicy,
    lifecycle::LifecycleEvent,
    session::Session,
};
use crate::query::{
    AccessLogFilter, AuditEventFilter, LifecycleEventFilter, SecurityAlertFilter, SessionFilter,
};

// ---------------------------------------------------------------------------
// Event logs
// ---------------------------------------------------------------------------

pub trait AuditEventRepository: Send + Sync {
    /// Events matching `filter`, newest first.
    fn list_audit_events(
        &self,
        filter: AuditEventFilter,
    ) -> impl Future<Output = AuditDeskResult<Vec<AuditEvent>>> + Send;
    fn get_audit_event(&self, id: &str) -> impl Future<Output = AuditDeskResult<AuditEvent>> + Send;
}

pub trait LifecycleEventRepository: Send + Sync {
    fn list_lifecycle_events(
        &self,
        filter: LifecycleEventFilter,
    ) -> impl Future<Output = AuditDeskResult<Vec<LifecycleEvent>>> + Send;
}

pub trait AccessLogRepository: Send + Sync {
    fn list_access_logs(
        &self,
        filter: AccessLogFilter,
    ) -> impl Future<Output = AuditDeskResult<Vec<AccessLog>>> + Send;
}

pub trait SecurityAlertRepository: Send + Sync {
    fn list_security_alerts(
        &self,
        filter: SecurityAlertFilter,
    ) -> impl Future<Output = AuditDeskResult<Vec<SecurityAlert>>> + Send;
}

// ---------------------------------------------------------------------------
// Configuration snapshots
// ---------------------------------------------------------------------------

pub trait SessionRepository: Send + Sync {
    fn list_sessions(
        &self,
        filter: SessionFilter,
    ) -> impl Future<Output = AuditDeskResult<Vec<Session>>> + Send;
}

pub trait IpPolicyRepository: Send + Sync {
    fn list_ip_policies(&self) -> impl Future<Output = AuditDeskResult<Vec<IpPolicy>>> + Send;
}

pub trait ExportRequestRepository: Send + Sync {
    /// Past export requests, newest first.
    fn list_export_requests(
        &self,
    ) -> impl Future<Output = AuditDeskResult<Vec<ExportRequest>>> + Send;
}

pub trait ClassificationRuleRepository: Send + Sync {
    fn list_classification_rules(
        &self,
    ) -> impl Future<Output = AuditDeskResult<Vec<DataClassificationRule>>> + Send;
}

// ---------------------------------------------------------------------------
// Export intents (append-only)
// ---------------------------------------------------------------------------

pub trait ExportRecordSink: Send + Sync {
    /// Append one export record. No update or delete operations exist.
    fn append(&self, record: ExportRecord) -> impl Future<Output = AuditDeskResult<()>> + Send;
}

/// Everything the dashboard reads, in one bound.
pub trait DashboardSource:
    AuditEventRepository
    + LifecycleEventRepository
    + AccessLogRepository
    + SecurityAlertRepository
    + SessionRepository
    + IpPolicyRepository
    + ExportRequestRepository
    + ClassificationRuleRepository
{
}

impl<T> DashboardSource for T where
    T: AuditEventRepository
        + LifecycleEventRepository
        + AccessLogRepository
        + SecurityAlertRepository
        + SessionRepository
        + IpPolicyRepository
        + ExportRequestRepository
        + ClassificationRuleRepository
{
}
