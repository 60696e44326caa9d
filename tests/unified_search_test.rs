use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use ddka_admin::app::ports::HttpClientPort;
use ddka_admin::app::{SearchView, UnifiedSearch};
use ddka_admin::error::HttpError;
use ddka_admin::search::normalizers::{GroupNormalizer, NormalizationRegistry, NormalizerUtils};
use ddka_admin::search::{EntityGroup, GroupFilter, SearchFilter, Status, StatusFilter};

/// Serves canned bodies per path; anything else is an HTTP 500
struct StubApi {
    bodies: HashMap<String, Value>,
}

impl StubApi {
    fn new(bodies: Vec<(&str, Value)>) -> Arc<Self> {
        Arc::new(Self { bodies: bodies.into_iter().map(|(p, v)| (p.to_string(), v)).collect() })
    }
}

#[async_trait]
impl HttpClientPort for StubApi {
    async fn get_json(&self, path: &str) -> Result<Value, HttpError> {
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| HttpError::Status { path: path.to_string(), status: 500 })
    }
}

fn players() -> Value {
    json!({"success": true, "data": [
        {"_id": "65a000000001", "fullName": "Jane Doe", "email": "jane@x.com",
         "idNo": "DDKA-P-0001", "transactionId": "abc123456789",
         "createdAt": "2025-04-01T09:00:00Z"},
        {"_id": "65a000000002", "fullName": "Ravi", "email": "JANE@x.com",
         "transactionId": "abc123456789"}
    ]})
}

fn institutions() -> Value {
    json!({"success": true, "data": [
        {"_id": "65b00000abcd", "instituteName": "Dojo One", "createdAt": "2025-05-01T09:00:00Z"}
    ]})
}

fn officials() -> Value {
    json!({"success": true, "data": [
        {"_id": "65c00000ef01", "candidateName": "Meena", "createdAt": "2025-03-01T09:00:00Z"}
    ]})
}

fn rows(view: SearchView) -> Vec<ddka_admin::search::UnifiedRecord> {
    match view {
        SearchView::Rows(rows) => rows,
        SearchView::Error(e) => panic!("unexpected error view: {}", e),
    }
}

#[tokio::test]
async fn id_labels_follow_group_rules() {
    let api = StubApi::new(vec![
        ("/api/players", players()),
        ("/api/institutions", institutions()),
        ("/api/technical-officials", officials()),
    ]);
    let load = UnifiedSearch::new(api).load().await.unwrap();
    let label = |id: &str| load.records.iter().find(|r| r.id == id).unwrap().id_label.clone();

    assert_eq!(label("65a000000001"), "DDKA-P-0001");
    assert_eq!(label("65a000000002"), "DDKA-456789");
    assert_eq!(label("65b00000abcd"), "INST-ABCD");
    assert_eq!(label("65c00000ef01"), "DDKA-2026-EF01");
}

#[tokio::test]
async fn undated_records_sort_after_dated_ones() {
    let api = StubApi::new(vec![
        ("/api/players", players()),
        ("/api/institutions", institutions()),
        ("/api/technical-officials", officials()),
    ]);
    let load = UnifiedSearch::new(api).load().await.unwrap();
    let ids: Vec<&str> = load.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["65b00000abcd", "65a000000001", "65c00000ef01", "65a000000002"]);
}

#[tokio::test]
async fn case_insensitive_query_hits_name_and_email() {
    let api = StubApi::new(vec![("/api/players", players())]);
    let search = UnifiedSearch::new(api);
    let filter = SearchFilter::new("jane", StatusFilter::All, GroupFilter::All);
    let hits = rows(search.view(&filter).await);
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn institution_outage_keeps_other_groups() {
    let api = StubApi::new(vec![
        ("/api/players", players()),
        ("/api/technical-officials", officials()),
    ]);
    let load = UnifiedSearch::new(api).load().await.unwrap();
    assert_eq!(load.records.len(), 3);
    assert_eq!(load.records.iter().filter(|r| r.group == EntityGroup::Institution).count(), 0);
    assert_eq!(load.failed_groups, vec![EntityGroup::Institution]);
}

#[tokio::test]
async fn unset_status_everywhere_is_pending() {
    let api = StubApi::new(vec![
        ("/api/players", json!({"success": true, "data": [{"_id": "p1"}, {"_id": "p2"}]})),
        ("/api/institutions", json!({"success": true, "data": [{"_id": "i1"}]})),
        ("/api/technical-officials", json!({"success": true, "data": [{"_id": "o1"}]})),
    ]);
    let search = UnifiedSearch::new(api);

    let all = rows(search.view(&SearchFilter::default()).await);
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(|r| r.status.as_str() == "Pending"));

    let approved = SearchFilter::new("", StatusFilter::Only(Status::Approved), GroupFilter::All);
    assert!(rows(search.view(&approved).await).is_empty());

    let refilter = SearchFilter::new(
        "p",
        StatusFilter::Only(Status::Pending),
        GroupFilter::Only(EntityGroup::Player),
    );
    let once = refilter.apply(&all);
    assert_eq!(refilter.apply(&once), once);
}

struct CoachNormalizer;

impl GroupNormalizer for CoachNormalizer {
    fn group(&self) -> EntityGroup {
        EntityGroup::Official
    }

    fn id_label(&self, id: &str, _data: &Value) -> String {
        format!("COACH-{}", NormalizerUtils::upper_suffix(id, 3))
    }
}

#[tokio::test]
async fn registry_entries_can_be_replaced() {
    let mut registry = NormalizationRegistry::new();
    registry.register(Box::new(CoachNormalizer));
    let api = StubApi::new(vec![("/api/technical-officials", officials())]);
    let load = UnifiedSearch::with_registry(api, registry).load().await.unwrap();
    assert_eq!(load.records[0].id_label, "COACH-F01");
}
