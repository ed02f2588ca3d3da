//! Integration tests for the in-memory store against the bundled dataset.

use auditdesk_core::error::AuditDeskError;
use auditdesk_core::models::LogSource;
use auditdesk_core::models::Outcome;
use auditdesk_core::models::audit::AuditAction;
use auditdesk_core::models::classification::DataClassification;
use auditdesk_core::models::session::SessionStatus;
use auditdesk_core::query::{AuditEventFilter, SessionFilter};
use auditdesk_core::repository::{
    AuditEventRepository, ExportRequestRepository, IpPolicyRepository, SessionRepository,
};
use auditdesk_store::{Dataset, MemoryStore, SEED_DATASET, StoreError};

fn store() -> MemoryStore {
    MemoryStore::seeded().unwrap()
}

fn ids(events: &[auditdesk_core::models::audit::AuditEvent]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Audit events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unfiltered_view_is_whole_store_newest_first() {
    let store = store();
    let events = store
        .list_audit_events(AuditEventFilter::default())
        .await
        .unwrap();

    assert_eq!(events.len(), store.dataset().audit_events.len());
    assert!(events.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    assert_eq!(events[0].id, "AUD-014");
    assert_eq!(events.last().unwrap().id, "AUD-001");
}

#[tokio::test]
async fn same_timestamp_keeps_insertion_order() {
    let events = store()
        .list_audit_events(AuditEventFilter::default().with_date_from("2024-03-15T11:20:00Z"))
        .await
        .unwrap();
    let ids = ids(&events);
    let pos_008 = ids.iter().position(|id| *id == "AUD-008").unwrap();
    let pos_009 = ids.iter().position(|id| *id == "AUD-009").unwrap();
    assert_eq!(pos_009, pos_008 + 1);
}

#[tokio::test]
async fn action_filter_returns_updates_only() {
    let events = store()
        .list_audit_events(AuditEventFilter::default().with_action(AuditAction::Update))
        .await
        .unwrap();
    assert_eq!(
        ids(&events),
        ["AUD-013", "AUD-010", "AUD-007", "AUD-006", "AUD-002", "AUD-004"]
    );
}

#[tokio::test]
async fn source_filter_splits_the_store() {
    let store = store();
    let desktop = store
        .list_audit_events(AuditEventFilter::default().with_source(Some(LogSource::DesktopApp)))
        .await
        .unwrap();
    let portal = store
        .list_audit_events(AuditEventFilter::default().with_source(Some(LogSource::AdminPortal)))
        .await
        .unwrap();
    let all = store
        .list_audit_events(AuditEventFilter::default())
        .await
        .unwrap();

    assert_eq!(ids(&desktop), ["AUD-014", "AUD-013", "AUD-009", "AUD-005", "AUD-003"]);
    assert_eq!(portal.len(), 8);
    // AUD-010 carries no source and only shows under "all".
    assert_eq!(all.len(), desktop.len() + portal.len() + 1);
}

#[tokio::test]
async fn combined_filters_are_a_conjunction() {
    let filter = AuditEventFilter::default()
        .with_classification(DataClassification::Restricted)
        .with_outcome(Outcome::Failure);
    let events = store().list_audit_events(filter).await.unwrap();
    assert_eq!(ids(&events), ["AUD-007"]);
}

#[tokio::test]
async fn actor_filter_skips_system_events() {
    let events = store()
        .list_audit_events(AuditEventFilter::default().with_actor_user_id("ADMIN"))
        .await
        .unwrap();
    assert_eq!(events.len(), 9);
    assert!(events.iter().all(|e| e.actor.user_id.is_some()));
}

#[tokio::test]
async fn date_only_range_covers_whole_day() {
    let filter = AuditEventFilter::default()
        .with_date_from("2024-03-15")
        .with_date_to("2024-03-15");
    let events = store().list_audit_events(filter).await.unwrap();
    assert_eq!(events.len(), 7);
}

#[tokio::test]
async fn get_audit_event_by_id() {
    let store = store();
    let event = store.get_audit_event("AUD-005").await.unwrap();
    assert_eq!(event.outcome, Outcome::Failure);
    assert!(event.failure_reason.is_some());

    match store.get_audit_event("AUD-404").await {
        Err(AuditDeskError::NotFound { entity, id }) => {
            assert_eq!(entity, "audit_event");
            assert_eq!(id, "AUD-404");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Other collections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sessions_filter_by_status() {
    let sessions = store()
        .list_sessions(SessionFilter {
            status: Some(SessionStatus::Active),
            ..Default::default()
        })
        .await
        .unwrap();
    let ids: Vec<_> = sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["SES-1011", "SES-1005"]);
}

#[tokio::test]
async fn export_requests_newest_first() {
    let requests = store().list_export_requests().await.unwrap();
    let ids: Vec<_> = requests.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["EXR-004", "EXR-002", "EXR-001", "EXR-003"]);
}

#[tokio::test]
async fn ip_policies_keep_configured_order() {
    let policies = store().list_ip_policies().await.unwrap();
    assert_eq!(policies.first().unwrap().id, "IPP-001");
    assert_eq!(policies.len(), 4);
}

// ---------------------------------------------------------------------------
// Dataset integrity
// ---------------------------------------------------------------------------

#[test]
fn duplicate_ids_are_rejected() {
    let mut dataset = Dataset::from_json(SEED_DATASET).unwrap();
    let dup = dataset.audit_events[0].clone();
    dataset.audit_events.push(dup);

    let err = MemoryStore::from_dataset(dataset).unwrap_err();
    assert!(matches!(
        err,
        StoreError::DuplicateId {
            collection: "audit_event",
            ..
        }
    ));
}

#[test]
fn failure_reason_on_success_is_rejected() {
    let mut dataset = Dataset::from_json(SEED_DATASET).unwrap();
    dataset.audit_events[0].failure_reason = Some("should not be here".into());

    let err = MemoryStore::from_dataset(dataset).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
    assert!(matches!(
        AuditDeskError::from(err),
        AuditDeskError::Integrity(_)
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = MemoryStore::from_json("{\"audit_events\": [{}]}").unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}
