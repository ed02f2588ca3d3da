//! Per-view filter state and rendered pages.
//!
//! Each view owns its filter value. Nothing here is shared between
//! views or persisted; dropping a view discards its selections.

use auditdesk_core::error::AuditDeskResult;
use auditdesk_core::models::LogSource;
use auditdesk_core::models::access_log::AccessLog;
use auditdesk_core::models::actor::Actor;
use auditdesk_core::models::alert::SecurityAlert;
use auditdesk_core::models::audit::AuditEvent;
use auditdesk_core::models::export::ExportFormat;
use auditdesk_core::models::lifecycle::LifecycleEvent;
use auditdesk_core::models::session::Session;
use auditdesk_core::query::{
    AccessLogFilter, AuditEventFilter, AuditSummary, LifecycleEventFilter, SecurityAlertFilter,
    SessionFilter,
};
use auditdesk_core::repository::{
    AccessLogRepository, AuditEventRepository, LifecycleEventRepository, SecurityAlertRepository,
    SessionRepository,
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::export::ExportIntent;

/// A rendered list with its row count.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<T> {
    pub total: usize,
    pub rows: Vec<T>,
}

impl<T> ListPage<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            total: rows.len(),
            rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Audit logs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogPage {
    pub filter: AuditEventFilter,
    pub summary: AuditSummary,
    pub rows: Vec<AuditEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct AuditLogView {
    filter: AuditEventFilter,
}

impl AuditLogView {
    pub fn filter(&self) -> &AuditEventFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut AuditEventFilter {
        &mut self.filter
    }

    pub fn set_filter(&mut self, filter: AuditEventFilter) {
        self.filter = filter;
    }

    /// `None` selects every origin.
    pub fn set_source(&mut self, source: Option<LogSource>) {
        self.filter.source = source;
    }

    pub fn reset(&mut self) {
        self.filter = AuditEventFilter::default();
    }

    pub async fn render<R: AuditEventRepository>(&self, repo: &R) -> AuditDeskResult<AuditLogPage> {
        let rows = repo.list_audit_events(self.filter.clone()).await?;
        Ok(AuditLogPage {
            filter: self.filter.clone(),
            summary: AuditSummary::from_events(&rows),
            rows,
        })
    }

    /// Export intent for the view as currently filtered.
    pub fn export_intent(
        &self,
        actor: Actor,
        justification: impl Into<String>,
        format: Option<ExportFormat>,
    ) -> ExportIntent {
        ExportIntent {
            actor,
            justification: justification.into(),
            filter: self.filter.clone(),
            format,
        }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle logs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct LifecycleView {
    pub filter: LifecycleEventFilter,
}

impl LifecycleView {
    pub async fn render<R: LifecycleEventRepository>(
        &self,
        repo: &R,
    ) -> AuditDeskResult<ListPage<LifecycleEvent>> {
        Ok(ListPage::new(
            repo.list_lifecycle_events(self.filter.clone()).await?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Access logs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct AccessLogView {
    pub filter: AccessLogFilter,
}

impl AccessLogView {
    pub async fn render<R: AccessLogRepository>(
        &self,
        repo: &R,
    ) -> AuditDeskResult<ListPage<AccessLog>> {
        Ok(ListPage::new(repo.list_access_logs(self.filter.clone()).await?))
    }
}

// ---------------------------------------------------------------------------
// Security alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AlertPage {
    /// Alerts still open or under investigation.
    pub active: usize,
    pub total: usize,
    pub rows: Vec<SecurityAlert>,
}

#[derive(Debug, Clone, Default)]
pub struct AlertView {
    pub filter: SecurityAlertFilter,
}

impl AlertView {
    pub async fn render<R: SecurityAlertRepository>(&self, repo: &R) -> AuditDeskResult<AlertPage> {
        let rows = repo.list_security_alerts(self.filter.clone()).await?;
        Ok(AlertPage {
            active: rows.iter().filter(|a| a.is_active()).count(),
            total: rows.len(),
            rows,
        })
    }
}

// ---------------------------------------------------------------------------
// Session controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SessionRow {
    #[serde(flatten)]
    pub session: Session,
    /// Active but inactive for longer than the idle timeout.
    pub idle: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SessionView {
    pub filter: SessionFilter,
}

impl SessionView {
    pub async fn render<R: SessionRepository>(
        &self,
        repo: &R,
        now: DateTime<Utc>,
        idle_timeout: Duration,
    ) -> AuditDeskResult<ListPage<SessionRow>> {
        let rows = repo
            .list_sessions(self.filter.clone())
            .await?
            .into_iter()
            .map(|session| SessionRow {
                idle: session.is_idle(now, idle_timeout),
                session,
            })
            .collect();
        Ok(ListPage::new(rows))
    }
}
