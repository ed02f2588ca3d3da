//! Query/filter engine.
//!
//! Every filter in this module is a plain, serializable value. Applying
//! one is a pure function of `(records, filter)`: the active predicates
//! are combined with AND, and the survivors are stably sorted newest
//! first so records sharing a timestamp keep their insertion order.
//!
//! Unset fields impose no constraint. Substring filters are
//! case-insensitive and never match a record whose field is null.
//! Date bounds are inclusive and arrive as raw strings; a bound that
//! does not parse is treated as unset.
//!
//! All filtering is a linear scan. That is fine for the dataset sizes
//! this crate serves; a production backend needs indexed, paginated
//! queries instead.

mod access;
mod alert;
mod audit;
mod lifecycle;
mod session;

pub use access::{AccessLogFilter, filter_access_logs};
pub use alert::{SecurityAlertFilter, filter_security_alerts};
pub use audit::{AuditEventFilter, AuditSummary, filter_audit_events};
pub use lifecycle::{LifecycleEventFilter, filter_lifecycle_events};
pub use session::{SessionFilter, filter_sessions};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

/// Which end of a range a date-only bound describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// Date-only input expands to the start of that day.
    Start,
    /// Date-only input expands to the last instant of that day.
    End,
}

/// Parse a raw date bound as typed into a filter form.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (read as UTC) and
/// `YYYY-MM-DD`. Anything else, including the empty string, yields
/// `None`.
pub fn parse_date_bound(raw: &str, kind: BoundKind) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let time = match kind {
            BoundKind::Start => NaiveTime::from_hms_opt(0, 0, 0)?,
            BoundKind::End => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)?,
        };
        return Some(date.and_time(time).and_utc());
    }

    debug!(value = raw, "ignoring unparseable date bound");
    None
}

/// Inclusive time window with optional ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(|s| parse_date_bound(s, BoundKind::Start)),
            to: to.and_then(|s| parse_date_bound(s, BoundKind::End)),
        }
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| from <= ts) && self.to.is_none_or(|to| ts <= to)
    }
}

/// Lowercased needle for substring matching, kept as typed.
/// Blank input is unset.
pub(crate) fn needle(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty()).map(str::to_lowercase)
}

/// Case-insensitive containment; a null haystack never matches.
pub(crate) fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Stable newest-first ordering.
pub(crate) fn sort_newest_first<T>(items: &mut [&T], timestamp: impl Fn(&T) -> DateTime<Utc>) {
    items.sort_by(|a, b| timestamp(*b).cmp(&timestamp(*a)));
}

/// Parse a UI enum value where `""` and `"all"` mean unset.
pub(crate) fn parse_choice<T>(key: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(key, value = raw, "ignoring unknown filter value");
            None
        }
    }
}

/// Keep a free-text UI value as typed, dropping blanks.
pub(crate) fn parse_text(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_string())
}
