use axum::Router;
use axum::http::{HeaderMap, HeaderValue, Method};
use axum::routing::any;
use tokio::net::TcpListener;

use super::*;
use crate::config::ServerConfig;

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("http://backend:8080", "/api/alerts/get-alerts-by-filter?x=1"),
        "http://backend:8080/api/alerts/get-alerts-by-filter?x=1"
    );
}

#[test]
fn upstream_url_does_not_double_slashes() {
    assert_eq!(upstream_url("http://backend/", "/api/x"), "http://backend/api/x");
    assert_eq!(upstream_url("http://backend", "api/x"), "http://backend/api/x");
}

#[test]
fn forwarded_headers_keeps_only_allowed_names() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("dashboard.local"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer tok");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

// =============================================================
// End to end
// =============================================================

async fn echo(method: Method, headers: HeaderMap, uri: axum::http::Uri, body: String) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let cookie = headers.contains_key(header::COOKIE);
    let status = if uri.path().ends_with("/missing") { StatusCode::NOT_FOUND } else { StatusCode::OK };
    (
        status,
        Json(serde_json::json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "authorization": auth,
            "cookie": cookie,
            "body": body,
        })),
    )
        .into_response()
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_proxy(backend_url: String) -> String {
    let config = ServerConfig { backend_url, port: 0, backend_timeout_secs: 5 };
    let state = AppState::new(&config).unwrap();
    spawn(Router::new().route("/api/{*path}", any(forward)).with_state(state)).await
}

#[tokio::test]
async fn forwards_method_path_headers_and_body() {
    let backend = spawn(Router::new().route("/api/{*path}", any(echo))).await;
    let proxy = spawn_proxy(backend).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/alerts/get-alert-by-id?debug=1"))
        .header(header::AUTHORIZATION, "Bearer tok")
        .header(header::COOKIE, "session=1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"alert_id":7}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["uri"], "/api/alerts/get-alert-by-id?debug=1");
    assert_eq!(body["authorization"], "Bearer tok");
    assert_eq!(body["cookie"], false);
    assert_eq!(body["body"], r#"{"alert_id":7}"#);
}

#[tokio::test]
async fn backend_status_is_passed_through() {
    let backend = spawn(Router::new().route("/api/{*path}", any(echo))).await;
    let proxy = spawn_proxy(backend).await;

    let resp = reqwest::get(format!("{proxy}/api/userlist/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_backend_answers_bad_gateway() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let proxy = spawn_proxy(format!("http://{addr}")).await;

    let resp = reqwest::get(format!("{proxy}/api/userlist/get-user-status")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Backend unavailable");
}
