//! Tests for `SegmentDefinitionsClient`.

use std::sync::Arc;

use http::Method;
use serde_json::json;

use super::SegmentDefinitionsClient;
use crate::pipeline::{ClientError, QueryParams};
use crate::test_fixtures::{MockTransport, body_json, pipeline, relative_url};

fn client(transport: &Arc<MockTransport>) -> SegmentDefinitionsClient<Arc<MockTransport>> {
    SegmentDefinitionsClient::new(pipeline(transport))
}

#[tokio::test]
async fn list_sends_documented_options() {
    let transport = MockTransport::json(200, r#"{"segments":[]}"#);
    let options = QueryParams::new()
        .with("limit", 5)
        .with("page", 2)
        .with("sort", "updateTime:desc");

    let result = client(&transport)
        .list_segment_definitions(&options)
        .await
        .unwrap();

    assert_eq!(
        relative_url(&transport.last_request()),
        "/data/core/ups/segment/definitions?limit=5&page=2&sort=updateTime%3Adesc"
    );
    assert_eq!(result, json!({"segments": []}));
}

#[tokio::test]
async fn create_posts_definition() {
    let transport = MockTransport::json(200, r#"{"id":"def-1"}"#);
    let payload = json!({"name": "People in CA", "expression": {"type": "PQL"}});

    let result = client(&transport)
        .create_segment_definition(&payload)
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(relative_url(&req), "/data/core/ups/segment/definitions");
    assert_eq!(body_json(&req), payload);
    assert_eq!(result["id"], "def-1");
}

#[tokio::test]
async fn get_encodes_identifier() {
    let transport = MockTransport::json(200, "{}");

    client(&transport)
        .get_segment_definition("def 1")
        .await
        .unwrap();

    assert_eq!(
        relative_url(&transport.last_request()),
        "/data/core/ups/segment/definitions/def%201"
    );
}

#[tokio::test]
async fn delete_returns_decoded_body() {
    let transport = MockTransport::json(200, r#"{"status":"deleted"}"#);

    let result = client(&transport)
        .delete_segment_definition("def-1")
        .await
        .unwrap();

    assert_eq!(transport.last_request().method, Method::DELETE);
    assert_eq!(result, json!({"status": "deleted"}));
}

#[tokio::test]
async fn delete_with_empty_body_is_decode_error() {
    let transport = MockTransport::empty(204);

    let err = client(&transport)
        .delete_segment_definition("def-1")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn delete_failure_message() {
    let transport = MockTransport::json(404, "{}");

    let err = client(&transport)
        .delete_segment_definition("def-1")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to delete segment definition");
}

#[tokio::test]
async fn patch_sends_operations() {
    let transport = MockTransport::json(200, "{}");
    let operations = json!([{"op": "add", "path": "/description", "value": "x"}]);

    client(&transport)
        .patch_segment_definition("def-1", &operations)
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(relative_url(&req), "/data/core/ups/segment/definitions/def-1");
    assert_eq!(body_json(&req), operations);
}

#[tokio::test]
async fn bulk_get_accepts_owned_ids() {
    let transport = MockTransport::json(207, "{}");
    let ids = vec!["def-1".to_string(), "def-2".to_string()];

    client(&transport)
        .bulk_get_segment_definitions(&ids)
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(relative_url(&req), "/data/core/ups/segment/definitions/bulk-get");
    assert_eq!(body_json(&req), json!({"ids": ["def-1", "def-2"]}));
}

#[tokio::test]
async fn convert_posts_to_conversion_endpoint() {
    let transport = MockTransport::json(200, r#"{"expression":{"format":"pql/json"}}"#);
    let payload = json!({"expression": {"type": "PQL", "format": "pql/text", "value": "true"}});

    client(&transport)
        .convert_segment_definition(&payload)
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(relative_url(&req), "/data/core/ups/segment/conversion");
}

#[tokio::test]
async fn convert_failure_message() {
    let transport = MockTransport::json(400, r#"{"title":"Bad PQL"}"#);

    let err = client(&transport)
        .convert_segment_definition(&json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to convert segment definition");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}
