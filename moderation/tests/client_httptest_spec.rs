use httptest::{matchers::*, responders::*, Expectation, Server};
use moderation::{AdminError, AuthenticatedClient};
use reqwest::Method;
use serde_json::json;
use session_store::StaticCredentialProvider;
use std::sync::Arc;

fn client_for(server: &Server, token: Option<&str>) -> AuthenticatedClient {
    let credentials = match token {
        Some(t) => StaticCredentialProvider::new(t),
        None => StaticCredentialProvider::anonymous(),
    };
    AuthenticatedClient::new(format!("http://{}", server.addr()), Arc::new(credentials)).unwrap()
}

#[tokio::test]
async fn given_token_when_request_then_bearer_and_json_headers_sent() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/api/admin/vendors"),
            request::headers(contains(("authorization", "Bearer test-token"))),
            request::headers(contains(("content-type", "application/json"))),
        ])
        .respond_with(json_encoded(json!({ "success": true, "data": [] }))),
    );

    let client = client_for(&server, Some("test-token"));
    let payload = client
        .request(Method::GET, "/api/admin/vendors", None)
        .await
        .unwrap();

    assert_eq!(payload, json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn given_body_when_post_then_body_is_json_encoded() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/api/admin/adminVandorStatus/V1"),
            request::headers(contains(("authorization", "Bearer test-token"))),
            request::body(json_decoded(eq(json!({ "profileActivation": "0" })))),
        ])
        .respond_with(json_encoded(json!({ "success": true }))),
    );

    let client = client_for(&server, Some("test-token"));
    let body = json!({ "profileActivation": "0" });
    let payload = client
        .request(Method::POST, "/api/admin/adminVandorStatus/V1", Some(&body))
        .await
        .unwrap();

    assert_eq!(payload["success"], json!(true));
}

#[tokio::test]
async fn given_error_status_with_json_body_when_request_then_payload_returned_verbatim() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/users")).respond_with(
            status_code(403)
                .append_header("Content-Type", "application/json")
                .body(json!({ "success": false, "message": "Admins only" }).to_string()),
        ),
    );

    let client = client_for(&server, Some("test-token"));
    let payload = client
        .request(Method::GET, "/api/admin/users", None)
        .await
        .unwrap();

    assert_eq!(payload, json!({ "success": false, "message": "Admins only" }));
}

#[tokio::test]
async fn given_non_json_body_when_request_then_parse_failure() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/vendors"))
            .respond_with(status_code(502).body("<html>Bad Gateway</html>")),
    );

    let client = client_for(&server, Some("test-token"));
    let result = client
        .request(Method::GET, "/api/admin/vendors", None)
        .await;

    assert!(matches!(result, Err(AdminError::NetworkOrParseFailure(_))));
}

#[tokio::test]
async fn given_no_token_when_request_then_unauthenticated_without_network_call() {
    // no expectations: any request reaching the server fails the test on drop
    let server = Server::run();

    let client = client_for(&server, None);
    let get = client
        .request(Method::GET, "/api/admin/pendingApprovals", None)
        .await;
    let post = client
        .request(
            Method::POST,
            "/api/admin/approveVendor/X",
            Some(&json!({ "profileActivation": "1" })),
        )
        .await;

    assert_eq!(get, Err(AdminError::Unauthenticated));
    assert_eq!(post, Err(AdminError::Unauthenticated));
}

#[tokio::test]
async fn given_unreachable_backend_when_request_then_network_failure() {
    let client = AuthenticatedClient::new(
        "http://127.0.0.1:1",
        Arc::new(StaticCredentialProvider::new("test-token")),
    )
    .unwrap();

    let result = client
        .request(Method::GET, "/api/admin/vendors", None)
        .await;

    match result {
        Err(AdminError::NetworkOrParseFailure(message)) => {
            assert!(message.starts_with("HTTP request failed"))
        }
        other => panic!("expected network failure, got {:?}", other),
    }
}

#[tokio::test]
async fn given_unexpected_shape_when_fetch_then_parse_failure() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/vendors"))
            .respond_with(json_encoded(json!({ "success": true, "data": "not-a-list" }))),
    );

    let client = client_for(&server, Some("test-token"));
    let result = client
        .fetch::<Vec<moderation::VendorProfile>>(Method::GET, "/api/admin/vendors", None)
        .await;

    assert!(matches!(result, Err(AdminError::NetworkOrParseFailure(_))));
}
