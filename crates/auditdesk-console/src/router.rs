//! Dashboard tab router.
//!
//! [`Dashboard`] is a small state machine over [`DashboardView`]. It starts
//! on the audit log tab and moves only on an explicit selection or a
//! recognised deep link. Each tab keeps its own filter state.

use std::fmt;
use std::str::FromStr;

use auditdesk_core::error::{AuditDeskError, AuditDeskResult};
use auditdesk_core::models::LogSource;
use auditdesk_core::models::access_log::AccessLog;
use auditdesk_core::models::classification::DataClassificationRule;
use auditdesk_core::models::export::ExportRequest;
use auditdesk_core::models::ip_policy::IpPolicy;
use auditdesk_core::models::lifecycle::LifecycleEvent;
use auditdesk_core::repository::DashboardSource;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::views::{
    AccessLogView, AlertPage, AlertView, AuditLogPage, AuditLogView, LifecycleView, ListPage,
    SessionRow, SessionView,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardView {
    #[default]
    AuditLogs,
    LifecycleLogs,
    AccessLogs,
    SecurityAlerts,
    SecurityPolicies,
    IpPolicies,
    SessionControls,
    ExportGovernance,
    DataClassification,
    AuditReviewTools,
}

impl DashboardView {
    /// Tabs in display order.
    pub const ALL: [DashboardView; 10] = [
        Self::AuditLogs,
        Self::LifecycleLogs,
        Self::AccessLogs,
        Self::SecurityAlerts,
        Self::SecurityPolicies,
        Self::IpPolicies,
        Self::SessionControls,
        Self::ExportGovernance,
        Self::DataClassification,
        Self::AuditReviewTools,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::AuditLogs => "audit-logs",
            Self::LifecycleLogs => "lifecycle-logs",
            Self::AccessLogs => "access-logs",
            Self::SecurityAlerts => "security-alerts",
            Self::SecurityPolicies => "security-policies",
            Self::IpPolicies => "ip-policies",
            Self::SessionControls => "session-controls",
            Self::ExportGovernance => "export-governance",
            Self::DataClassification => "data-classification",
            Self::AuditReviewTools => "audit-review-tools",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AuditLogs => "Audit Logs",
            Self::LifecycleLogs => "Lifecycle Logs",
            Self::AccessLogs => "Access Logs",
            Self::SecurityAlerts => "Security Alerts",
            Self::SecurityPolicies => "Security Policies",
            Self::IpPolicies => "IP Policies",
            Self::SessionControls => "Session Controls",
            Self::ExportGovernance => "Export Governance",
            Self::DataClassification => "Data Classification",
            Self::AuditReviewTools => "Audit Review Tools",
        }
    }

    /// Tabs that have no content yet.
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::SecurityPolicies | Self::AuditReviewTools)
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DashboardView {
    type Err = AuditDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| AuditDeskError::validation(format!("unknown dashboard view: {s}")))
    }
}

/// A recognised deep link into the audit log tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub view: DashboardView,
    /// `None` is the "all origins" link.
    pub source: Option<LogSource>,
}

impl DeepLink {
    /// Parse a path such as `/desktop-app`, `admin-portal/` or `/all`.
    ///
    /// Query strings and fragments are ignored. Any other path yields `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('/')
            .to_ascii_lowercase();

        let source = match path.as_str() {
            "all" => None,
            "desktop-app" => Some(LogSource::DesktopApp),
            "admin-portal" => Some(LogSource::AdminPortal),
            _ => return None,
        };
        Some(Self {
            view: DashboardView::AuditLogs,
            source,
        })
    }
}

/// Rendered content of the active tab.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "kebab-case")]
pub enum ViewContent {
    AuditLogs(AuditLogPage),
    LifecycleLogs(ListPage<LifecycleEvent>),
    AccessLogs(ListPage<AccessLog>),
    SecurityAlerts(AlertPage),
    IpPolicies(ListPage<IpPolicy>),
    SessionControls(ListPage<SessionRow>),
    ExportGovernance(ListPage<ExportRequest>),
    DataClassification(ListPage<DataClassificationRule>),
    Placeholder(DashboardView),
}

impl ViewContent {
    /// The tab this content belongs to.
    pub fn view(&self) -> DashboardView {
        match self {
            Self::AuditLogs(_) => DashboardView::AuditLogs,
            Self::LifecycleLogs(_) => DashboardView::LifecycleLogs,
            Self::AccessLogs(_) => DashboardView::AccessLogs,
            Self::SecurityAlerts(_) => DashboardView::SecurityAlerts,
            Self::IpPolicies(_) => DashboardView::IpPolicies,
            Self::SessionControls(_) => DashboardView::SessionControls,
            Self::ExportGovernance(_) => DashboardView::ExportGovernance,
            Self::DataClassification(_) => DashboardView::DataClassification,
            Self::Placeholder(view) => *view,
        }
    }
}

/// The dashboard shell: active tab plus the filter state of every tab.
#[derive(Debug, Clone)]
pub struct Dashboard {
    active: DashboardView,
    config: ConsoleConfig,
    audit_logs: AuditLogView,
    lifecycle: LifecycleView,
    access_logs: AccessLogView,
    alerts: AlertView,
    sessions: SessionView,
}

impl Dashboard {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            active: DashboardView::default(),
            config,
            audit_logs: AuditLogView::default(),
            lifecycle: LifecycleView::default(),
            access_logs: AccessLogView::default(),
            alerts: AlertView::default(),
            sessions: SessionView::default(),
        }
    }

    pub fn active(&self) -> DashboardView {
        self.active
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn select(&mut self, view: DashboardView) {
        if self.active != view {
            debug!(from = self.active.slug(), to = view.slug(), "Dashboard view changed");
        }
        self.active = view;
    }

    /// Follow a deep link. Unrecognised paths leave the dashboard untouched.
    pub fn open_deep_link(&mut self, path: &str) -> Option<DeepLink> {
        let Some(link) = DeepLink::parse(path) else {
            debug!(path, "Ignoring unknown deep link");
            return None;
        };
        self.select(link.view);
        self.audit_logs.set_source(link.source);
        Some(link)
    }

    pub fn audit_logs(&self) -> &AuditLogView {
        &self.audit_logs
    }

    pub fn audit_logs_mut(&mut self) -> &mut AuditLogView {
        &mut self.audit_logs
    }

    pub fn lifecycle(&self) -> &LifecycleView {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut LifecycleView {
        &mut self.lifecycle
    }

    pub fn access_logs(&self) -> &AccessLogView {
        &self.access_logs
    }

    pub fn access_logs_mut(&mut self) -> &mut AccessLogView {
        &mut self.access_logs
    }

    pub fn alerts(&self) -> &AlertView {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut AlertView {
        &mut self.alerts
    }

    pub fn sessions(&self) -> &SessionView {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionView {
        &mut self.sessions
    }

    /// Render the active tab against `source`.
    pub async fn render<S: DashboardSource>(&self, source: &S) -> AuditDeskResult<ViewContent> {
        let content = match self.active {
            DashboardView::AuditLogs => {
                ViewContent::AuditLogs(self.audit_logs.render(source).await?)
            }
            DashboardView::LifecycleLogs => {
                ViewContent::LifecycleLogs(self.lifecycle.render(source).await?)
            }
            DashboardView::AccessLogs => {
                ViewContent::AccessLogs(self.access_logs.render(source).await?)
            }
            DashboardView::SecurityAlerts => {
                ViewContent::SecurityAlerts(self.alerts.render(source).await?)
            }
            DashboardView::SessionControls => ViewContent::SessionControls(
                self.sessions
                    .render(source, Utc::now(), self.config.session_idle_timeout())
                    .await?,
            ),
            DashboardView::IpPolicies => {
                ViewContent::IpPolicies(ListPage::new(source.list_ip_policies().await?))
            }
            DashboardView::ExportGovernance => {
                ViewContent::ExportGovernance(ListPage::new(source.list_export_requests().await?))
            }
            DashboardView::DataClassification => ViewContent::DataClassification(ListPage::new(
                source.list_classification_rules().await?,
            )),
            view @ (DashboardView::SecurityPolicies | DashboardView::AuditReviewTools) => {
                ViewContent::Placeholder(view)
            }
        };
        Ok(content)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}
