//! Access log filtering.

use serde::{Deserialize, Serialize};

use super::{DateRange, contains_ci, needle, sort_newest_first};
use crate::models::access_log::{AccessLog, AccessType};
use crate::models::{LogSource, Outcome};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccessLogFilter {
    /// Free text matched against id, user id, resource and IP address.
    pub query: Option<String>,
    pub access_type: Option<AccessType>,
    pub outcome: Option<Outcome>,
    pub source: Option<LogSource>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

pub fn filter_access_logs<'a>(
    logs: &'a [AccessLog],
    filter: &AccessLogFilter,
) -> Vec<&'a AccessLog> {
    let query = needle(filter.query.as_deref());
    let range = DateRange::parse(filter.date_from.as_deref(), filter.date_to.as_deref());

    let mut view: Vec<&AccessLog> = logs
        .iter()
        .filter(|log| {
            query.as_deref().is_none_or(|q| {
                contains_ci(Some(log.id.as_str()), q)
                    || contains_ci(log.user_id.as_deref(), q)
                    || contains_ci(Some(log.resource.as_str()), q)
                    || contains_ci(log.ip_address.as_deref(), q)
            })
        })
        .filter(|log| filter.access_type.is_none_or(|t| t == log.access_type))
        .filter(|log| filter.outcome.is_none_or(|o| o == log.outcome))
        .filter(|log| filter.source.is_none_or(|s| log.source == Some(s)))
        .filter(|log| range.contains(log.timestamp))
        .collect();
    sort_newest_first(&mut view, |log| log.timestamp);
    view
}
