//! `/api/*` forwarder to the catalog backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under `/api/` are
//! replayed against `CATALOG_BACKEND_URL` with the same method, path, query,
//! body, and the `Content-Type` / `Authorization` headers. Upstream status and
//! body come back unchanged; only a transport failure is turned into a 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Request headers replayed upstream.
const FORWARDED_REQUEST_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api forward failed");
        let body = serde_json::json!({ "message": "Backend unavailable. Please try again." });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Forward one `/api/*` request and relay the backend's answer.
///
/// # Errors
///
/// Returns `ProxyError` when the backend cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = upstream_url(&state.config.backend_url, &uri);
    tracing::debug!(%method, %target, "forwarding api request");

    let mut request = state.http.request(method.clone(), target.as_str());
    for name in &FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %target, status = status.as_u16(), "api request forwarded");

    let mut response = (status, bytes).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    } else {
        response.headers_mut().remove(header::CONTENT_TYPE);
    }
    Ok(response)
}

/// Backend URL for `uri`, keeping path and query as received.
pub fn upstream_url(backend: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{}", backend.trim_end_matches('/'), path_and_query)
}
