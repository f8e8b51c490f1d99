//! End-to-end copy orchestration tests against mock source and destination
//! stores.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kibana_client::copy::{CopyOptions, copy_dashboard};
use kibana_client::{ClientError, ClusterEndpoint, ObjectType, StoreClient};

fn client_for(server: &MockServer) -> StoreClient {
    let addr = server.address();
    StoreClient::new(ClusterEndpoint::new(addr.ip().to_string(), addr.port(), ".kibana"))
}

async fn mount_get_dashboard(server: &MockServer, id: &str, source: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/.kibana/dashboard/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": id,
            "_source": source,
            "found": true
        })))
        .mount(server)
        .await;
}

async fn mount_search(server: &MockServer, object_type: ObjectType, hits: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/.kibana/{object_type}/_search")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"hits": {"hits": hits}})),
        )
        .mount(server)
        .await;
}

async fn mount_put(server: &MockServer, object_type: ObjectType, id: &str) {
    Mock::given(method("PUT"))
        .and(path(format!("/.kibana/{object_type}/{id}")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": id})))
        .expect(1)
        .mount(server)
        .await;
}

fn dashboard_source() -> Value {
    json!({
        "title": "Ops Overview",
        "panelsJSON": r#"[{"id":"v1","col":1,"row":1},{"id":"v2","col":4,"row":1}]"#
    })
}

/// Dashboard d1 references v1 and v2; v1 references saved search s1.
/// Everything exists at the source, so d1, v1, v2, and s1 all land at the
/// destination under their original ids.
#[tokio::test]
async fn test_copies_dashboard_with_dependencies() {
    let source = MockServer::start().await;
    let dest = MockServer::start().await;

    mount_get_dashboard(&source, "d1", dashboard_source()).await;
    mount_search(
        &source,
        ObjectType::Visualization,
        json!([
            {"_id": "v1", "_source": {"title": "one", "savedSearchId": "s1"}},
            {"_id": "v2", "_source": {"title": "two"}}
        ]),
    )
    .await;
    mount_search(
        &source,
        ObjectType::Search,
        json!([{"_id": "s1", "_source": {"title": "errors"}}]),
    )
    .await;

    mount_put(&dest, ObjectType::Dashboard, "d1").await;
    mount_put(&dest, ObjectType::Visualization, "v1").await;
    mount_put(&dest, ObjectType::Visualization, "v2").await;
    mount_put(&dest, ObjectType::Search, "s1").await;

    let report = copy_dashboard(
        &client_for(&source),
        &client_for(&dest),
        "d1",
        &CopyOptions::default(),
        |_| {},
    )
    .await
    .unwrap();

    assert_eq!(report.written(), 4);
    assert_eq!(report.failed(), 0);
}

/// Saved search s1 is gone from the source. The run tolerates it: d1, v1,
/// and v2 are copied and nothing halts.
#[tokio::test]
async fn test_missing_saved_search_is_tolerated() {
    let source = MockServer::start().await;
    let dest = MockServer::start().await;

    mount_get_dashboard(&source, "d1", dashboard_source()).await;
    mount_search(
        &source,
        ObjectType::Visualization,
        json!([
            {"_id": "v1", "_source": {"title": "one", "savedSearchId": "s1"}},
            {"_id": "v2", "_source": {"title": "two"}}
        ]),
    )
    .await;
    mount_search(&source, ObjectType::Search, json!([])).await;

    mount_put(&dest, ObjectType::Dashboard, "d1").await;
    mount_put(&dest, ObjectType::Visualization, "v1").await;
    mount_put(&dest, ObjectType::Visualization, "v2").await;

    let report = copy_dashboard(
        &client_for(&source),
        &client_for(&dest),
        "d1",
        &CopyOptions::default(),
        |_| {},
    )
    .await
    .unwrap();

    assert_eq!(report.written(), 3);
    assert_eq!(report.failed(), 0);
}

/// With a saved-search index override, the written search body has its
/// nested index replaced and everything else preserved.
#[tokio::test]
async fn test_saved_search_index_override_rewrites_in_transit() {
    let source = MockServer::start().await;
    let dest = MockServer::start().await;

    mount_get_dashboard(&source, "d1", dashboard_source()).await;
    mount_search(
        &source,
        ObjectType::Visualization,
        json!([
            {"_id": "v1", "_source": {"title": "one", "savedSearchId": "s1"}},
            {"_id": "v2", "_source": {"title": "two"}}
        ]),
    )
    .await;
    mount_search(
        &source,
        ObjectType::Search,
        json!([{
            "_id": "s1",
            "_source": {
                "title": "errors",
                "kibanaSavedObjectMeta": {
                    "searchSourceJSON": r#"{"index":"logstash-*","query":{"match_all":{}}}"#
                }
            }
        }]),
    )
    .await;

    mount_put(&dest, ObjectType::Dashboard, "d1").await;
    mount_put(&dest, ObjectType::Visualization, "v1").await;
    mount_put(&dest, ObjectType::Visualization, "v2").await;
    Mock::given(method("PUT"))
        .and(path("/.kibana/search/s1"))
        .and(body_json(json!({
            "title": "errors",
            "kibanaSavedObjectMeta": {
                "searchSourceJSON": r#"{"index":"newidx","query":{"match_all":{}}}"#
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "s1"})))
        .expect(1)
        .mount(&dest)
        .await;

    let options = CopyOptions {
        saved_search_index: Some("newidx".to_string()),
    };
    let report = copy_dashboard(&client_for(&source), &client_for(&dest), "d1", &options, |_| {})
        .await
        .unwrap();

    assert_eq!(report.written(), 4);
    assert_eq!(report.failed(), 0);
}

/// A search whose nested JSON cannot be parsed is skipped with a recorded
/// error; the other searches still go through.
#[tokio::test]
async fn test_unparseable_search_source_skips_only_that_search() {
    let source = MockServer::start().await;
    let dest = MockServer::start().await;

    mount_get_dashboard(
        &source,
        "d1",
        json!({
            "title": "dash",
            "panelsJSON": r#"[{"id":"v1"},{"id":"v2"}]"#
        }),
    )
    .await;
    mount_search(
        &source,
        ObjectType::Visualization,
        json!([
            {"_id": "v1", "_source": {"savedSearchId": "s1"}},
            {"_id": "v2", "_source": {"savedSearchId": "s2"}}
        ]),
    )
    .await;
    mount_search(
        &source,
        ObjectType::Search,
        json!([
            {"_id": "s1", "_source": {"kibanaSavedObjectMeta": {"searchSourceJSON": "not json"}}},
            {"_id": "s2", "_source": {"kibanaSavedObjectMeta": {"searchSourceJSON": "{\"index\":\"old\"}"}}}
        ]),
    )
    .await;

    mount_put(&dest, ObjectType::Dashboard, "d1").await;
    mount_put(&dest, ObjectType::Visualization, "v1").await;
    mount_put(&dest, ObjectType::Visualization, "v2").await;
    mount_put(&dest, ObjectType::Search, "s2").await;

    let options = CopyOptions {
        saved_search_index: Some("newidx".to_string()),
    };
    let report = copy_dashboard(&client_for(&source), &client_for(&dest), "d1", &options, |_| {})
        .await
        .unwrap();

    assert_eq!(report.written(), 4);
    assert_eq!(report.failed(), 1);
    let skipped = report
        .outcomes
        .iter()
        .find(|o| o.result.is_err())
        .unwrap();
    assert_eq!(skipped.id, "s1");
    assert!(matches!(
        skipped.result,
        Err(ClientError::MalformedSearchSource(_))
    ));
}

/// A panel referencing a visualization the source no longer has records a
/// not-found outcome for that id only.
#[tokio::test]
async fn test_missing_visualization_fails_that_id_only() {
    let source = MockServer::start().await;
    let dest = MockServer::start().await;

    mount_get_dashboard(&source, "d1", dashboard_source()).await;
    mount_search(
        &source,
        ObjectType::Visualization,
        json!([{"_id": "v1", "_source": {"title": "one"}}]),
    )
    .await;
    mount_search(&source, ObjectType::Search, json!([])).await;

    mount_put(&dest, ObjectType::Dashboard, "d1").await;
    mount_put(&dest, ObjectType::Visualization, "v1").await;

    let report = copy_dashboard(
        &client_for(&source),
        &client_for(&dest),
        "d1",
        &CopyOptions::default(),
        |_| {},
    )
    .await
    .unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(report.failed(), 1);
    let missing = report
        .outcomes
        .iter()
        .find(|o| o.result.is_err())
        .unwrap();
    assert_eq!(missing.object_type, ObjectType::Visualization);
    assert_eq!(missing.id, "v2");
    assert!(matches!(missing.result, Err(ClientError::NotFound(_))));
}

/// Identical source and destination endpoints abort before any network
/// call. Nothing is listening on the default endpoint here, so a transport
/// error instead of `SameCluster` would mean a request was attempted.
#[tokio::test]
async fn test_same_cluster_guard_makes_no_requests() {
    let source = StoreClient::new(ClusterEndpoint::default());
    let dest = StoreClient::new(ClusterEndpoint::default());

    let err = copy_dashboard(&source, &dest, "d1", &CopyOptions::default(), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::SameCluster));
}

/// A failed dashboard fetch is fatal: no writes happen.
#[tokio::test]
async fn test_missing_dashboard_is_fatal() {
    let source = MockServer::start().await;
    let dest = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.kibana/dashboard/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"found": false})))
        .mount(&source)
        .await;

    let err = copy_dashboard(
        &client_for(&source),
        &client_for(&dest),
        "ghost",
        &CopyOptions::default(),
        |_| {},
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(dest.received_requests().await.unwrap().is_empty());
}
