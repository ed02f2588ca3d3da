//! Lifecycle event domain model.
//!
//! A lifecycle event records a state transition of a tracked entity
//! (an inspection moving from `draft` to `submitted`, a facility being
//! suspended, and so on).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum LifecycleEntityType {
        Inspection => ("inspection", "Inspection"),
        Facility => ("facility", "Facility"),
        Report => ("report", "Report"),
        User => ("user", "User"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub id: String,
    pub entity_type: LifecycleEntityType,
    pub entity_id: String,
    /// `None` for the initial transition into existence.
    pub from_state: Option<String>,
    pub to_state: String,
    pub actor_user_id: Option<String>,
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}
