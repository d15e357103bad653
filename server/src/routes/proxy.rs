//! `/api/*` reverse proxy to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Requests under `/api` are
//! forwarded with their method, path, query and body; only the
//! `Authorization`, `Content-Type` and `Accept` headers travel upstream. The
//! backend's status, body and content type come back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable backend answers `502` with a `{ "message": ... }` body so
//! the dashboard's error toasts have text to show.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Upstream URL for `path_and_query` under `backend_url`.
pub(crate) fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    let base = backend_url.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

/// Subset of `incoming` headers sent to the backend.
pub(crate) fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn bad_gateway(message: &str) -> Response {
    (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "message": message }))).into_response()
}

/// Forward one `/api/*` request.
pub async fn forward(State(state): State<AppState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.backend_url, path_and_query);

    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %url, "request body rejected");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwarded_headers(&parts.headers))
        .body(bytes)
        .send()
        .await;
    let upstream = match upstream {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, method = %parts.method, %url, "backend unreachable");
            return bad_gateway("Backend unavailable");
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body = match upstream.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, %url, "backend response truncated");
            return bad_gateway("Backend response could not be read");
        }
    };
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}
