#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use serde_json::json;

fn enquiry_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "mobile": "9000000000",
        "email": format!("{}@example.com", name.to_lowercase()),
        "created_at": "2025-02-10T08:15:00Z"
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn submit_enquiry_posts_payload_without_auth() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/enquiries/");
        then.status(201).json_body(json!({"id": 5, "name": "Ravi"}));
    });
    let api = client_for(&server);

    api.submit_enquiry(&NewEnquiry {
        name: "Ravi".into(),
        mobile: "9123456780".into(),
        email: "ravi@example.com".into(),
    })
    .await
    .unwrap();

    let requests = server.requests_to("/api/enquiries/");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].authorization.is_none());
    assert_eq!(
        requests[0].body,
        Some(json!({"name": "Ravi", "mobile": "9123456780", "email": "ravi@example.com"}))
    );
}

#[tokio::test]
async fn submit_enquiry_surfaces_server_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/enquiries/");
        then.status(400).json_body(json!({"detail": "Invalid email"}));
    });
    let api = client_for(&server);

    let err = api.submit_enquiry(&NewEnquiry::default()).await.unwrap_err();
    assert_eq!(err.status, Some(400));
    assert_eq!(err.error, "Invalid email");
}

#[tokio::test]
async fn login_returns_access_token_without_installing_it() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login/");
        then.status(200)
            .json_body(json!({"access": "tok123", "refresh": "ref456"}));
    });
    let api = client_for(&server);

    let resp = api
        .login(&AdminLoginRequest {
            username_or_email: "admin".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    assert_eq!(resp.access, "tok123");
    assert!(!api.credentials().is_set());
    let sent = &server.requests_to("/api/auth/admin/login/")[0];
    assert_eq!(
        sent.body,
        Some(json!({"username_or_email": "admin", "password": "pw"}))
    );
}

#[tokio::test]
async fn login_failure_propagates_unauthorized_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login/");
        then.status(401)
            .json_body(json!({"detail": "No active account found with the given credentials"}));
    });
    let api = client_for(&server);

    let err = api
        .login(&AdminLoginRequest {
            username_or_email: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.code, "UNAUTHORIZED");
}

#[tokio::test]
async fn list_enquiries_sends_page_and_bearer_header() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/admin/enquiries/")
            .query_param("page", "3");
        then.status(200).json_body(json!({
            "count": 41,
            "results": [enquiry_json(1, "Asha"), enquiry_json(2, "Bala")]
        }));
    });
    let api = client_for(&server);
    api.credentials().install("tok123");

    let page = api.list_enquiries(3).await.unwrap();

    assert_eq!(page.count, 41);
    assert_eq!(page.results.len(), 2);
    let sent = &server.requests_to("/api/admin/enquiries/")[0];
    assert_eq!(sent.query_param("page"), Some("3"));
    assert_eq!(sent.authorization.as_deref(), Some("Bearer tok123"));
}

#[tokio::test]
async fn cleared_credential_removes_header_from_later_requests() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/enquiries/");
        then.status(200).json_body(json!({"count": 0, "results": []}));
    });
    let api = client_for(&server);
    let shared = api.clone();

    api.credentials().install("tok123");
    shared.list_enquiries(1).await.unwrap();
    api.credentials().clear();
    shared.list_enquiries(1).await.unwrap();

    let sent = server.requests_to("/api/admin/enquiries/");
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer tok123"));
    assert!(sent[1].authorization.is_none());
}

#[tokio::test]
async fn list_enquiries_maps_non_success_to_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/enquiries/");
        then.status(500).body("internal error");
    });
    let api = client_for(&server);

    let err = api.list_enquiries(1).await.unwrap_err();
    assert_eq!(err.status, Some(500));
    assert_eq!(err.code, "HTTP_500");
}

#[tokio::test]
async fn list_enquiries_rejects_malformed_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/enquiries/");
        then.status(200).json_body(json!({"results": [{"id": "not-a-number"}]}));
    });
    let api = client_for(&server);

    let err = api.list_enquiries(1).await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
    assert!(err.error.starts_with("Failed to parse response"));
}

#[tokio::test]
async fn exports_return_raw_bytes() {
    let server = MockServer::start();
    let xlsx = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff];
    let pdf = b"%PDF-1.7\n%\xe2\xe3".to_vec();
    {
        let xlsx = xlsx.clone();
        server.mock(move |when, then| {
            when.method(GET).path("/api/admin/enquiries/export/excel/");
            then.status(200).body(xlsx);
        });
    }
    {
        let pdf = pdf.clone();
        server.mock(move |when, then| {
            when.method(GET).path("/api/admin/enquiries/export/pdf/");
            then.status(200).body(pdf);
        });
    }
    let api = client_for(&server);
    api.credentials().install("tok123");

    assert_eq!(api.export_excel().await.unwrap(), xlsx);
    assert_eq!(api.export_pdf().await.unwrap(), pdf);
    assert!(server
        .requests()
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer tok123")));
}

#[tokio::test]
async fn export_failure_is_reported_to_caller() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/enquiries/export/pdf/");
        then.status(503).json_body(json!({"error": "PDF service unavailable"}));
    });
    let api = client_for(&server);

    let err = api.export_pdf().await.unwrap_err();
    assert_eq!(err.error, "PDF service unavailable");
    assert_eq!(err.status, Some(503));
}

#[test]
fn base_url_trailing_slash_is_normalized() {
    let server = MockServer::start();
    let base = server.url("/api");
    let api = ApiClient::new_with_base_url(format!("{}/", base));
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    assert_eq!(rt.block_on(api.resolved_base_url()), base);
}
