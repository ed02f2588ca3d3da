//! IP allow/deny policy configuration snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::actor::ScopeType;

labeled_enum! {
    pub enum IpRule {
        Allow => ("allow", "Allow"),
        Deny => ("deny", "Deny"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpPolicy {
    pub id: String,
    /// Address range in CIDR notation, e.g. `10.20.0.0/16`.
    pub cidr: String,
    pub rule: IpRule,
    pub description: String,
    pub scope_type: ScopeType,
    pub enabled: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
