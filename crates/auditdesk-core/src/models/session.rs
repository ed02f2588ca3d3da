//! Session domain model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::LogSource;

labeled_enum! {
    pub enum SessionStatus {
        Active => ("active", "Active"),
        Idle => ("idle", "Idle"),
        Expired => ("expired", "Expired"),
        Revoked => ("revoked", "Revoked"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub role_id: String,
    pub ip_address: Option<String>,
    pub device_id: Option<String>,
    pub user_agent: Option<String>,
    #[serde(default)]
    pub source: Option<LogSource>,
    pub started_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: SessionStatus,
}

impl Session {
    /// An active session with no activity for at least `idle_timeout`.
    pub fn is_idle(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        self.status == SessionStatus::Active && now - self.last_activity_at >= idle_timeout
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == SessionStatus::Expired || self.expires_at <= now
    }
}
