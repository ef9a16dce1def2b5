//! Tests for `AudiencesClient`.

use std::sync::Arc;

use http::Method;
use http::header::CONTENT_TYPE;
use serde_json::json;

use super::AudiencesClient;
use crate::pipeline::{ClientError, QueryParams};
use crate::test_fixtures::{
    MockTransport, body_json, body_text, json_response, pipeline, relative_url,
};
use crate::transport::HttpError;

fn client(transport: &Arc<MockTransport>) -> AudiencesClient<Arc<MockTransport>> {
    AudiencesClient::new(pipeline(transport))
}

#[tokio::test]
async fn list_audiences_sends_query_and_decodes_body() {
    let transport = MockTransport::json(200, r#"{"children":[],"_page":{"totalCount":0}}"#);
    let options = QueryParams::new().with("start", 0).with("limit", 20);

    let result = client(&transport).list_audiences(&options).await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(relative_url(&req), "/data/core/ups/audiences?start=0&limit=20");
    assert!(req.body.is_none());
    assert_eq!(result, json!({"children": [], "_page": {"totalCount": 0}}));
}

#[tokio::test]
async fn list_audiences_without_options_has_no_query() {
    let transport = MockTransport::json(200, "{}");

    client(&transport)
        .list_audiences(&QueryParams::new())
        .await
        .unwrap();

    assert_eq!(relative_url(&transport.last_request()), "/data/core/ups/audiences");
}

#[tokio::test]
async fn create_audience_posts_payload_verbatim() {
    let transport = MockTransport::json(201, r#"{"id":"aud-1","name":"Test"}"#);
    let payload = json!({
        "name": "Test",
        "description": "Audience created in a test",
        "expression": {"type": "PQL", "format": "pql/text", "value": "true"},
        "schema": {"name": "_xdm.context.profile"},
    });

    let result = client(&transport).create_audience(&payload).await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(relative_url(&req), "/data/core/ups/audiences");
    assert_eq!(req.header_str(CONTENT_TYPE), Some("application/json"));
    assert_eq!(body_json(&req), payload);
    assert!(body_text(&req).starts_with(r#"{"name":"Test","description""#));
    assert_eq!(result["id"], "aud-1");
}

#[tokio::test]
async fn delete_missing_audience_reports_status() {
    let transport = MockTransport::json(404, r#"{"title":"Not found"}"#);

    let err = client(&transport)
        .delete_audience("non-existent-id")
        .await
        .unwrap_err();

    let api = err.as_api().expect("expected an API error");
    assert_eq!(api.message(), "Failed to delete audience");
    assert_eq!(api.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(
        api.response().and_then(|r| r.body_text()),
        Some(r#"{"title":"Not found"}"#)
    );
    assert_eq!(
        relative_url(&transport.last_request()),
        "/data/core/ups/audiences/non-existent-id"
    );
}

#[tokio::test]
async fn delete_audience_ignores_empty_body() {
    let transport = MockTransport::empty(204);

    client(&transport).delete_audience("aud-1").await.unwrap();

    assert_eq!(transport.last_request().method, Method::DELETE);
}

#[tokio::test]
async fn get_audience_encodes_identifier() {
    let transport = MockTransport::json(200, r#"{"id":"test id with spaces"}"#);

    client(&transport)
        .get_audience("test id with spaces")
        .await
        .unwrap();

    let req = transport.last_request();
    assert!(!req.url.contains(' '));
    assert_eq!(
        relative_url(&req),
        "/data/core/ups/audiences/test%20id%20with%20spaces"
    );
}

#[tokio::test]
async fn get_audience_encodes_slash_as_one_segment() {
    let transport = MockTransport::json(200, "{}");

    client(&transport).get_audience("a/b:c@d").await.unwrap();

    assert_eq!(
        relative_url(&transport.last_request()),
        "/data/core/ups/audiences/a%2Fb%3Ac%40d"
    );
}

#[tokio::test]
async fn patch_audience_sends_operations() {
    let transport = MockTransport::json(200, r#"{"id":"aud-1"}"#);
    let operations = json!([{"op": "replace", "path": "/description", "value": "new"}]);

    client(&transport)
        .patch_audience("aud-1", &operations)
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(relative_url(&req), "/data/core/ups/audiences/aud-1");
    assert_eq!(body_json(&req), operations);
}

#[tokio::test]
async fn update_audience_uses_put() {
    let transport = MockTransport::json(200, "{}");

    client(&transport)
        .update_audience("aud-1", &json!({"name": "Renamed"}))
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(body_json(&req), json!({"name": "Renamed"}));
}

#[tokio::test]
async fn bulk_get_audiences_wraps_ids() {
    let transport = MockTransport::json(207, r#"{"results":{}}"#);

    client(&transport)
        .bulk_get_audiences(&["a", "b"])
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(relative_url(&req), "/data/core/ups/audiences/bulk-get");
    assert_eq!(body_json(&req), json!({"ids": ["a", "b"]}));
}

#[tokio::test]
async fn any_2xx_is_success() {
    for status in [200, 201, 202, 207, 299] {
        let transport = MockTransport::json(status, r#"{"ok":true}"#);

        let result = client(&transport).get_audience("aud-1").await;

        assert_eq!(result.unwrap(), json!({"ok": true}), "status {status}");
    }
}

#[tokio::test]
async fn statuses_from_300_fail_with_that_status() {
    for status in [300, 301, 304, 400, 401, 403, 409, 429, 500, 503] {
        let transport = MockTransport::json(status, "{}");

        let err = client(&transport).get_audience("aud-1").await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to retrieve audience");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
    }
}

#[tokio::test]
async fn transport_error_is_not_retried() {
    let transport = MockTransport::failing(HttpError::Timeout);

    let err = client(&transport)
        .list_audiences(&QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(HttpError::Timeout)));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn invalid_json_body_is_decode_error() {
    let transport = MockTransport::json(200, "<html>");

    let err = client(&transport).get_audience("aud-1").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn clones_share_pipeline() {
    let transport = MockTransport::new(vec![
        Ok(json_response(200, "{}")),
        Ok(json_response(200, "{}")),
    ]);
    let first = client(&transport);
    let second = first.clone();

    first.get_audience("a").await.unwrap();
    second.get_audience("b").await.unwrap();

    assert_eq!(transport.requests().len(), 2);
}
