//! Actor identity and organizational scope.

use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Organizational or geographic boundary of an actor's authority.
    pub enum ScopeType {
        National => ("national", "National"),
        Region => ("region", "Region"),
        District => ("district", "District"),
        Facility => ("facility", "Facility"),
    }
}

/// The identity behind a recorded action.
///
/// `user_id` is absent for system-originated events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Option<String>,
    pub role_id: String,
    pub scope_type: ScopeType,
    #[serde(default)]
    pub scope_ids: Vec<String>,
}

impl Actor {
    pub fn user(
        user_id: impl Into<String>,
        role_id: impl Into<String>,
        scope_type: ScopeType,
    ) -> Self {
        Self {
            user_id: Some(user_id.into()),
            role_id: role_id.into(),
            scope_type,
            scope_ids: Vec::new(),
        }
    }

    pub fn with_scope_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}
