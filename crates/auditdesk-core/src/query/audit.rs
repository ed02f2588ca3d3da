//! Audit event filtering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DateRange, contains_ci, needle, parse_choice, parse_text, sort_newest_first};
use crate::models::audit::{AuditAction, AuditEvent, AuditEventType, TargetType};
use crate::models::classification::DataClassification;
use crate::models::{LogSource, Outcome};

/// Filter specification for the audit log view.
///
/// Every field is optional and `None` means "no constraint". `source`
/// set to `None` is the "all" origin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuditEventFilter {
    /// Free text matched against id, actor id, target id and event label.
    pub query: Option<String>,
    pub event_type: Option<AuditEventType>,
    pub action: Option<AuditAction>,
    pub target_type: Option<TargetType>,
    pub outcome: Option<Outcome>,
    pub classification: Option<DataClassification>,
    /// Case-insensitive substring of the actor's user id.
    pub actor_user_id: Option<String>,
    /// Case-insensitive substring of the target id.
    pub target_id: Option<String>,
    /// Inclusive lower bound, as typed.
    pub date_from: Option<String>,
    /// Inclusive upper bound, as typed.
    pub date_to: Option<String>,
    pub source: Option<LogSource>,
}

impl AuditEventFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_event_type(mut self, event_type: AuditEventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn with_action(mut self, action: AuditAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_target_type(mut self, target_type: TargetType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_classification(mut self, classification: DataClassification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn with_actor_user_id(mut self, actor_user_id: impl Into<String>) -> Self {
        self.actor_user_id = Some(actor_user_id.into());
        self
    }

    pub fn with_target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    pub fn with_date_from(mut self, date_from: impl Into<String>) -> Self {
        self.date_from = Some(date_from.into());
        self
    }

    pub fn with_date_to(mut self, date_to: impl Into<String>) -> Self {
        self.date_to = Some(date_to.into());
        self
    }

    pub fn with_source(mut self, source: Option<LogSource>) -> Self {
        self.source = source;
        self
    }

    /// Build a filter from form-style key/value pairs.
    ///
    /// Blank values and `"all"` leave a field unset. Unknown keys and
    /// unrecognised enum values are ignored.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();
        for (key, value) in params {
            match key {
                "q" | "query" | "search" => filter.query = parse_text(value),
                "event_type" => filter.event_type = parse_choice(key, value),
                "action" => filter.action = parse_choice(key, value),
                "target_type" => filter.target_type = parse_choice(key, value),
                "result" | "outcome" => filter.outcome = parse_choice(key, value),
                "classification" | "data_classification" => {
                    filter.classification = parse_choice(key, value)
                }
                "actor_user_id" | "actor" => filter.actor_user_id = parse_text(value),
                "target_id" => filter.target_id = parse_text(value),
                "date_from" => filter.date_from = parse_text(value),
                "date_to" => filter.date_to = parse_text(value),
                "source" => filter.source = parse_choice(key, value),
                other => debug!(key = other, "ignoring unknown audit filter parameter"),
            }
        }
        filter
    }

    /// True when no field constrains the result.
    pub fn is_unset(&self) -> bool {
        self.compile().is_unset()
    }

    fn compile(&self) -> CompiledAuditFilter {
        CompiledAuditFilter {
            query: needle(self.query.as_deref()),
            event_type: self.event_type,
            action: self.action,
            target_type: self.target_type,
            outcome: self.outcome,
            classification: self.classification,
            actor_user_id: needle(self.actor_user_id.as_deref()),
            target_id: needle(self.target_id.as_deref()),
            range: DateRange::parse(self.date_from.as_deref(), self.date_to.as_deref()),
            source: self.source,
        }
    }
}

/// Filter with needles lowercased and date bounds parsed once.
struct CompiledAuditFilter {
    query: Option<String>,
    event_type: Option<AuditEventType>,
    action: Option<AuditAction>,
    target_type: Option<TargetType>,
    outcome: Option<Outcome>,
    classification: Option<DataClassification>,
    actor_user_id: Option<String>,
    target_id: Option<String>,
    range: DateRange,
    source: Option<LogSource>,
}

impl CompiledAuditFilter {
    fn is_unset(&self) -> bool {
        self.query.is_none()
            && self.event_type.is_none()
            && self.action.is_none()
            && self.target_type.is_none()
            && self.outcome.is_none()
            && self.classification.is_none()
            && self.actor_user_id.is_none()
            && self.target_id.is_none()
            && self.range == DateRange::default()
            && self.source.is_none()
    }

    fn matches(&self, event: &AuditEvent) -> bool {
        if let Some(q) = &self.query {
            let hit = contains_ci(Some(event.id.as_str()), q)
                || contains_ci(event.actor_user_id(), q)
                || contains_ci(event.target_id(), q)
                || contains_ci(Some(event.event_type.label()), q);
            if !hit {
                return false;
            }
        }

        if self.event_type.is_some_and(|t| t != event.event_type)
            || self.action.is_some_and(|a| a != event.action)
            || self.target_type.is_some_and(|t| t != event.target.target_type)
            || self.outcome.is_some_and(|o| o != event.outcome)
            || self.classification.is_some_and(|c| c != event.classification)
        {
            return false;
        }

        if let Some(actor) = &self.actor_user_id {
            if !contains_ci(event.actor_user_id(), actor) {
                return false;
            }
        }

        if let Some(target) = &self.target_id {
            if !contains_ci(event.target_id(), target) {
                return false;
            }
        }

        if let Some(source) = self.source {
            if event.source != Some(source) {
                return false;
            }
        }

        self.range.contains(event.timestamp)
    }
}

/// Apply `filter` to `events`, newest first.
///
/// Events sharing a timestamp keep their relative order from `events`.
pub fn filter_audit_events<'a>(
    events: &'a [AuditEvent],
    filter: &AuditEventFilter,
) -> Vec<&'a AuditEvent> {
    let compiled = filter.compile();
    let mut view: Vec<&AuditEvent> = events.iter().filter(|e| compiled.matches(e)).collect();
    sort_newest_first(&mut view, |e| e.timestamp);
    view
}

/// Headline counts shown above the audit table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub public: usize,
    pub internal: usize,
    pub restricted: usize,
}

impl AuditSummary {
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a AuditEvent>,
    {
        events.into_iter().fold(Self::default(), |mut s, e| {
            s.total += 1;
            match e.outcome {
                Outcome::Success => s.succeeded += 1,
                Outcome::Failure => s.failed += 1,
            }
            match e.classification {
                DataClassification::Public => s.public += 1,
                DataClassification::Internal => s.internal += 1,
                DataClassification::Restricted => s.restricted += 1,
            }
            s
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::actor::{Actor, ScopeType};
    use crate::models::audit::{NetworkContext, TargetRef};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    fn event(id: &str, actor: Option<&str>, action: AuditAction, ts: DateTime<Utc>) -> AuditEvent {
        AuditEvent {
            id: id.into(),
            event_type: AuditEventType::RecordUpdated,
            actor: Actor {
                user_id: actor.map(Into::into),
                role_id: "role-admin".into(),
                scope_type: ScopeType::National,
                scope_ids: vec!["NAT".into()],
            },
            target: TargetRef {
                target_type: TargetType::Inspection,
                target_id: Some(format!("INS-{id}")),
            },
            action,
            before: None,
            after: None,
            timestamp: ts,
            network: NetworkContext::default(),
            outcome: Outcome::Success,
            failure_reason: None,
            correlation_id: None,
            classification: DataClassification::Internal,
            source: Some(LogSource::AdminPortal),
        }
    }

    /// Four events: admin-001 create, admin-001 update, admin-002 download,
    /// admin-001 update, with AUD-002 the most recent.
    fn scenario() -> Vec<AuditEvent> {
        vec![
            event("AUD-001", Some("admin-001"), AuditAction::Create, at(1, 9)),
            event("AUD-002", Some("admin-001"), AuditAction::Update, at(4, 9)),
            event("AUD-003", Some("admin-002"), AuditAction::Download, at(3, 9)),
            event("AUD-004", Some("admin-001"), AuditAction::Update, at(2, 9)),
        ]
    }

    fn ids(view: &[&AuditEvent]) -> Vec<String> {
        view.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn unset_filter_returns_everything_newest_first() {
        let events = scenario();
        let view = filter_audit_events(&events, &AuditEventFilter::default());
        assert_eq!(ids(&view), ["AUD-002", "AUD-003", "AUD-004", "AUD-001"]);
        assert!(AuditEventFilter::default().is_unset());
    }

    #[test]
    fn action_filter_scenario() {
        let events = scenario();
        let filter = AuditEventFilter::default().with_action(AuditAction::Update);
        let view = filter_audit_events(&events, &filter);
        assert_eq!(ids(&view), ["AUD-002", "AUD-004"]);
    }

    #[test]
    fn classification_filter_is_exact() {
        let mut events = scenario();
        events[1].classification = DataClassification::Restricted;
        events[3].classification = DataClassification::Restricted;

        let filter =
            AuditEventFilter::default().with_classification(DataClassification::Restricted);
        let view = filter_audit_events(&events, &filter);

        assert!(view.iter().all(|e| e.classification == DataClassification::Restricted));
        let expected = events
            .iter()
            .filter(|e| e.classification == DataClassification::Restricted)
            .count();
        assert_eq!(view.len(), expected);
    }

    fn query(events: &[AuditEvent], q: &str) -> Vec<String> {
        ids(&filter_audit_events(events, &AuditEventFilter::default().with_query(q)))
    }

    #[test]
    fn event_and_target_type_filters_are_exact() {
        let mut events = scenario();
        events[2].event_type = AuditEventType::ReportDownloaded;
        events[2].target.target_type = TargetType::Report;

        let filter = AuditEventFilter::default().with_event_type(AuditEventType::ReportDownloaded);
        assert_eq!(ids(&filter_audit_events(&events, &filter)), ["AUD-003"]);

        let filter = AuditEventFilter::default().with_target_type(TargetType::Inspection);
        assert_eq!(
            ids(&filter_audit_events(&events, &filter)),
            ["AUD-002", "AUD-004", "AUD-001"]
        );

        let filter = AuditEventFilter::default()
            .with_event_type(AuditEventType::ReportDownloaded)
            .with_target_type(TargetType::Inspection);
        assert!(filter_audit_events(&events, &filter).is_empty());
    }

    #[test]
    fn text_query_matches_any_searchable_field() {
        let mut events = scenario();
        events[2].event_type = AuditEventType::ReportDownloaded;

        // actor id, case-insensitive
        assert_eq!(query(&events, "ADMIN-002"), ["AUD-003"]);
        // event-type label
        assert_eq!(query(&events, "downloaded"), ["AUD-003"]);
        // target id
        assert_eq!(query(&events, "ins-aud-004"), ["AUD-004"]);
        // event id, matches everything
        assert_eq!(query(&events, "aud-").len(), events.len());
    }

    #[test]
    fn padded_query_is_matched_as_typed() {
        let events = scenario();
        assert!(query(&events, " admin").is_empty());
        assert!(query(&events, "admin-001 ").is_empty());
        assert_eq!(query(&events, "record ").len(), events.len());

        let filter = AuditEventFilter::default().with_actor_user_id(" admin");
        assert!(filter_audit_events(&events, &filter).is_empty());

        let filter = AuditEventFilter::from_params([("q", " admin")]);
        assert_eq!(filter.query.as_deref(), Some(" admin"));
        assert!(filter_audit_events(&events, &filter).is_empty());
    }

    #[test]
    fn text_query_results_always_contain_the_query() {
        let events = scenario();
        for q in ["001", "admin", " admin", "record ", "zzz", "INS", "-00"] {
            let view = filter_audit_events(&events, &AuditEventFilter::default().with_query(q));
            let lower = q.to_lowercase();
            let hits = |e: &AuditEvent| {
                [
                    Some(e.id.as_str()),
                    e.actor_user_id(),
                    e.target_id(),
                    Some(e.event_type.label()),
                ]
                .into_iter()
                .flatten()
                .any(|f| f.to_lowercase().contains(&lower))
            };
            assert!(view.iter().copied().all(|e| hits(e)), "query {q}");
            assert_eq!(view.len(), events.iter().filter(|e| hits(*e)).count(), "query {q}");
        }
    }

    #[test]
    fn null_fields_do_not_match_substring_filters() {
        let mut events = scenario();
        events[0].actor.user_id = None;
        events[1].target.target_id = None;

        let filter = AuditEventFilter::default().with_actor_user_id("admin");
        let view = filter_audit_events(&events, &filter);
        assert!(!ids(&view).contains(&"AUD-001".to_string()));
        assert_eq!(view.len(), 3);

        let filter = AuditEventFilter::default().with_target_id("ins-");
        let view = filter_audit_events(&events, &filter);
        assert!(!ids(&view).contains(&"AUD-002".to_string()));
        assert_eq!(view.len(), 3);

        // a system event with no actor can still be found by id
        assert_eq!(query(&events, "aud-001"), ["AUD-001"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let events = scenario();
        let filter = AuditEventFilter::default()
            .with_actor_user_id("admin-001")
            .with_date_from("2024-03-02");
        let first = ids(&filter_audit_events(&events, &filter));
        let second = ids(&filter_audit_events(&events, &filter));
        assert_eq!(first, second);
        assert_eq!(first, ["AUD-002", "AUD-004"]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let ts = at(5, 12);
        let events = vec![
            event("AUD-010", Some("a"), AuditAction::Read, ts),
            event("AUD-011", Some("b"), AuditAction::Read, at(1, 1)),
            event("AUD-012", Some("c"), AuditAction::Read, ts),
            event("AUD-013", Some("d"), AuditAction::Read, ts),
        ];
        let view = filter_audit_events(&events, &AuditEventFilter::default());
        assert_eq!(ids(&view), ["AUD-010", "AUD-012", "AUD-013", "AUD-011"]);

        assert_eq!(query(&events, "aud-01"), ["AUD-010", "AUD-012", "AUD-013", "AUD-011"]);
    }

    #[test]
    fn date_from_equal_to_timestamp_is_included() {
        let events = scenario();
        let filter = AuditEventFilter::default().with_date_from("2024-03-03T09:00:00Z");
        let view = filter_audit_events(&events, &filter);
        assert_eq!(ids(&view), ["AUD-002", "AUD-003"]);

        let filter = AuditEventFilter::default().with_date_to("2024-03-03T09:00:00Z");
        let view = filter_audit_events(&events, &filter);
        assert_eq!(ids(&view), ["AUD-003", "AUD-004", "AUD-001"]);
    }

    #[test]
    fn invalid_date_behaves_like_empty_date() {
        let events = scenario();
        let invalid = AuditEventFilter::default().with_date_from("31/02/2024");
        let empty = AuditEventFilter::default().with_date_from("");
        assert_eq!(
            ids(&filter_audit_events(&events, &invalid)),
            ids(&filter_audit_events(&events, &empty))
        );
        assert!(invalid.is_unset());
    }

    #[test]
    fn source_filter_skips_records_without_source() {
        let mut events = scenario();
        events[0].source = None;
        events[2].source = Some(LogSource::DesktopApp);

        let admin = AuditEventFilter::default().with_source(Some(LogSource::AdminPortal));
        assert_eq!(ids(&filter_audit_events(&events, &admin)), ["AUD-002", "AUD-004"]);

        let all = AuditEventFilter::default().with_source(None);
        assert_eq!(filter_audit_events(&events, &all).len(), 4);
    }

    #[test]
    fn from_params_treats_all_and_blank_as_unset() {
        let filter = AuditEventFilter::from_params([
            ("q", "  "),
            ("action", "update"),
            ("result", "all"),
            ("classification", "Restricted"),
            ("source", "desktop-app"),
            ("date_from", "2024-03-01"),
            ("event_type", "no-such-type"),
            ("page", "2"),
        ]);
        assert_eq!(filter.query, None);
        assert_eq!(filter.action, Some(AuditAction::Update));
        assert_eq!(filter.outcome, None);
        assert_eq!(filter.classification, Some(DataClassification::Restricted));
        assert_eq!(filter.source, Some(LogSource::DesktopApp));
        assert_eq!(filter.date_from.as_deref(), Some("2024-03-01"));
        assert_eq!(filter.event_type, None);
    }

    #[test]
    fn filter_round_trips_through_json() {
        let filter = AuditEventFilter::default()
            .with_action(AuditAction::Download)
            .with_source(Some(LogSource::DesktopApp));
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["action"], "download");
        assert_eq!(json["source"], "desktop-app");
        let partial: AuditEventFilter = serde_json::from_str(r#"{"outcome":"failure"}"#).unwrap();
        assert_eq!(partial.outcome, Some(Outcome::Failure));
        assert_eq!(partial.action, None);
    }

    #[test]
    fn summary_counts_outcomes_and_classifications() {
        let mut events = scenario();
        events[0].outcome = Outcome::Failure;
        events[0].failure_reason = Some("denied".into());
        events[1].classification = DataClassification::Public;
        let summary = AuditSummary::from_events(&events);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.public, 1);
        assert_eq!(summary.internal, 3);
        assert_eq!(summary.restricted, 0);
    }
}
