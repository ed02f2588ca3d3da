//! Lifecycle event filtering.

use serde::{Deserialize, Serialize};

use super::{DateRange, contains_ci, needle, sort_newest_first};
use crate::models::lifecycle::{LifecycleEntityType, LifecycleEvent};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LifecycleEventFilter {
    pub entity_type: Option<LifecycleEntityType>,
    /// Case-insensitive substring of the entity id.
    pub entity_id: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

pub fn filter_lifecycle_events<'a>(
    events: &'a [LifecycleEvent],
    filter: &LifecycleEventFilter,
) -> Vec<&'a LifecycleEvent> {
    let entity = needle(filter.entity_id.as_deref());
    let range = DateRange::parse(filter.date_from.as_deref(), filter.date_to.as_deref());

    let mut view: Vec<&LifecycleEvent> = events
        .iter()
        .filter(|e| filter.entity_type.is_none_or(|t| t == e.entity_type))
        .filter(|e| entity.as_deref().is_none_or(|id| contains_ci(Some(e.entity_id.as_str()), id)))
        .filter(|e| range.contains(e.timestamp))
        .collect();
    sort_newest_first(&mut view, |e| e.timestamp);
    view
}
