//! End-to-end tests for both cleanup modes against a mock document server.

use std::time::Duration;

use docsum_cli::cleanup::{CleanupTarget, NoteCleanup};
use docsum_client::PaperlessClient;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_single_document_deletes_only_marker_notes() {
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "notes": [
                {"id": 1, "note": "AI_SUMMARY blah"},
                {"id": 2, "note": "unrelated"}
            ]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/documents/7/notes/"))
        .and(query_param("id", "1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&paperless)
        .await;

    let client = PaperlessClient::new(&paperless.uri(), "secret");
    let deleted = NoteCleanup::new(&client, "AI_SUMMARY")
        .run(CleanupTarget::Document(7))
        .await
        .unwrap();

    assert_eq!(deleted, 1);

    // Exactly one delete was issued, for note 1.
    let requests = paperless.received_requests().await.unwrap();
    let deletes: Vec<_> = requests
        .iter()
        .filter(|r| r.method.as_str() == "DELETE")
        .collect();
    assert_eq!(deletes.len(), 1);
}

#[tokio::test]
async fn test_single_document_note_failure_does_not_block_others() {
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "notes": [
                {"id": 1, "note": "AI_SUMMARY one"},
                {"id": 2, "note": "AI_SUMMARY two"}
            ]
        })))
        .mount(&paperless)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/documents/7/notes/"))
        .and(query_param("id", "1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&paperless)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/documents/7/notes/"))
        .and(query_param("id", "2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&paperless)
        .await;

    let client = PaperlessClient::new(&paperless.uri(), "secret");
    let deleted = NoteCleanup::new(&client, "AI_SUMMARY")
        .run(CleanupTarget::Document(7))
        .await
        .unwrap();

    assert_eq!(deleted, 1);
}

#[tokio::test]
async fn test_all_mode_crawls_pages_and_deletes_marker_notes() {
    let paperless = MockServer::start().await;
    let base = paperless.uri();

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 3,
            "next": format!("{}/documents/?ordering=-id&page=2", base),
            "results": [
                {"id": 10, "notes": [
                    {"id": 1, "note": "AI_SUMMARY a"},
                    {"id": 2, "note": "keep me"},
                    {"id": 3, "note": "AI_SUMMARY b"}
                ]},
                {"id": 9, "notes": []}
            ]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 3,
            "next": null,
            "results": [
                {"id": 8, "notes": [{"id": 4, "note": "x AI_SUMMARY y"}]}
            ]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/documents/10/notes/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&paperless)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/documents/8/notes/"))
        .and(query_param("id", "4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&paperless)
        .await;

    let client = PaperlessClient::new(&base, "secret");
    let deleted = NoteCleanup::new(&client, "AI_SUMMARY")
        .run(CleanupTarget::All)
        .await
        .unwrap();

    assert_eq!(deleted, 3);
}

#[tokio::test]
async fn test_all_mode_stops_on_cross_origin_next() {
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "next": "http://evil.example.com/documents/?page=2",
            "results": [
                {"id": 5, "notes": [{"id": 1, "note": "AI_SUMMARY old"}]}
            ]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/documents/5/notes/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&paperless)
        .await;

    let client = PaperlessClient::new(&paperless.uri(), "secret");
    let deleted = NoteCleanup::new(&client, "AI_SUMMARY")
        .run(CleanupTarget::All)
        .await
        .unwrap();

    // Page 1 was processed; the poisoned link was never followed.
    assert_eq!(deleted, 1);
    let requests = paperless.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2); // one GET, one DELETE
}

#[tokio::test]
async fn test_all_mode_second_run_deletes_nothing() {
    // State after a successful cleanup: no note carries the marker.
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "next": null,
            "results": [
                {"id": 10, "notes": [{"id": 2, "note": "keep me"}]},
                {"id": 9, "notes": []}
            ]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&paperless)
        .await;

    let client = PaperlessClient::new(&paperless.uri(), "secret");
    let deleted = NoteCleanup::new(&client, "AI_SUMMARY")
        .run(CleanupTarget::All)
        .await
        .unwrap();

    assert_eq!(deleted, 0);
}

#[tokio::test]
async fn test_all_mode_page_timeout_is_recoverable() {
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({"count": 0, "next": null, "results": []})),
        )
        .mount(&paperless)
        .await;

    let client = PaperlessClient::new(&paperless.uri(), "secret");
    let deleted = NoteCleanup::new(&client, "AI_SUMMARY")
        .with_page_timeout(Duration::from_millis(50))
        .run(CleanupTarget::All)
        .await
        .unwrap();

    // The timed-out page is abandoned; the run itself succeeds.
    assert_eq!(deleted, 0);
}

#[tokio::test]
async fn test_all_mode_request_error_is_fatal() {
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&paperless)
        .await;

    let client = PaperlessClient::new(&paperless.uri(), "secret");
    let err = NoteCleanup::new(&client, "AI_SUMMARY")
        .run(CleanupTarget::All)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("502 Bad Gateway"));
}

#[tokio::test]
async fn test_usage_error_issues_no_network_call() {
    // Parsing fails before any client exists; nothing to assert against a
    // server, but the parse contract itself must reject the input.
    for bad in ["-5", "0", "everything", ""] {
        assert!(CleanupTarget::parse(&[bad.to_string()]).is_err());
    }
    assert!(CleanupTarget::parse(&[]).is_err());
}
