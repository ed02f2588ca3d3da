//! Access log domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{LogSource, Outcome};

labeled_enum! {
    pub enum AccessType {
        Login => ("login", "Login"),
        Logout => ("logout", "Logout"),
        FailedLogin => ("failed_login", "Failed Login"),
        PageView => ("page_view", "Page View"),
        ApiCall => ("api_call", "API Call"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessLog {
    pub id: String,
    pub user_id: Option<String>,
    pub access_type: AccessType,
    /// Page path or API route that was accessed.
    pub resource: String,
    pub ip_address: Option<String>,
    pub device_id: Option<String>,
    pub user_agent: Option<String>,
    pub location: Option<String>,
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub source: Option<LogSource>,
}
