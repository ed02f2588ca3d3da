//! Security alert filtering.

use serde::{Deserialize, Serialize};

use super::{contains_ci, needle, sort_newest_first};
use crate::models::alert::{AlertSeverity, AlertStatus, AlertType, SecurityAlert};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SecurityAlertFilter {
    /// Free text matched against id, description and user id.
    pub query: Option<String>,
    /// Keep alerts at or above this severity.
    pub min_severity: Option<AlertSeverity>,
    pub status: Option<AlertStatus>,
    pub alert_type: Option<AlertType>,
}

pub fn filter_security_alerts<'a>(
    alerts: &'a [SecurityAlert],
    filter: &SecurityAlertFilter,
) -> Vec<&'a SecurityAlert> {
    let query = needle(filter.query.as_deref());

    let mut view: Vec<&SecurityAlert> = alerts
        .iter()
        .filter(|a| {
            query.as_deref().is_none_or(|q| {
                contains_ci(Some(a.id.as_str()), q)
                    || contains_ci(Some(a.description.as_str()), q)
                    || contains_ci(a.user_id.as_deref(), q)
            })
        })
        .filter(|a| filter.min_severity.is_none_or(|s| a.severity >= s))
        .filter(|a| filter.status.is_none_or(|s| s == a.status))
        .filter(|a| filter.alert_type.is_none_or(|t| t == a.alert_type))
        .collect();
    sort_newest_first(&mut view, |a| a.detected_at);
    view
}
