//! Session filtering for the session controls view.

use serde::{Deserialize, Serialize};

use super::{contains_ci, needle, sort_newest_first};
use crate::models::LogSource;
use crate::models::session::{Session, SessionStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionFilter {
    pub user_id: Option<String>,
    pub status: Option<SessionStatus>,
    pub source: Option<LogSource>,
}

/// Sessions matching `filter`, most recently active first.
pub fn filter_sessions<'a>(sessions: &'a [Session], filter: &SessionFilter) -> Vec<&'a Session> {
    let user = needle(filter.user_id.as_deref());

    let mut view: Vec<&Session> = sessions
        .iter()
        .filter(|s| user.as_deref().is_none_or(|u| contains_ci(Some(s.user_id.as_str()), u)))
        .filter(|s| filter.status.is_none_or(|st| st == s.status))
        .filter(|s| filter.source.is_none_or(|src| s.source == Some(src)))
        .collect();
    sort_newest_first(&mut view, |s| s.last_activity_at);
    view
}
