//! Upstream request forwarding.
//!
//! # Responsibilities
//! - Rewrite the request URI onto the upstream origin
//! - Rewrite the Host header when cross-origin masking is enabled
//! - Tag each proxied request with an x-request-id
//! - Log one line per proxied request naming the target URL

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::server::dev::AppState;

/// Request bodies are buffered before forwarding; dev traffic is small.
const MAX_BUFFERED_BODY: usize = 2 * 1024 * 1024;

/// Headers that must not be forwarded in either direction.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Forward a request to the configured upstream origin.
pub(super) async fn forward(state: &AppState, request: Request<Body>) -> Response {
    let request_id = Uuid::new_v4();
    let (parts, body) = request.into_parts();
    let target = target_url(&state.upstream.origin, &parts.uri);

    let body = match axum::body::to_bytes(body, MAX_BUFFERED_BODY).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::warn!(request_id = %request_id, error = %error, "failed to buffer request body");
            return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response();
        }
    };

    tracing::info!(
        request_id = %request_id,
        method = %parts.method,
        target = %target,
        "proxying request"
    );

    let mut headers = parts.headers.clone();
    for name in HOP_BY_HOP {
        headers.remove(*name);
    }
    if state.upstream.change_origin {
        // The client fills in Host from the target URL.
        headers.remove(header::HOST);
    }
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        headers.insert("x-request-id", value);
    }

    let upstream = state
        .client
        .request(parts.method.clone(), &target)
        .headers(headers)
        .body(body)
        .send()
        .await;

    let response = match upstream {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(request_id = %request_id, error = %error, "upstream request failed");
            return (StatusCode::BAD_GATEWAY, "upstream request failed").into_response();
        }
    };

    let status = response.status();
    let mut response_headers = response.headers().clone();
    for name in HOP_BY_HOP {
        response_headers.remove(*name);
    }
    // The body is re-framed below.
    response_headers.remove(header::CONTENT_LENGTH);

    match response.bytes().await {
        Ok(bytes) => {
            let mut out = Response::new(Body::from(bytes));
            *out.status_mut() = status;
            *out.headers_mut() = response_headers;
            out
        }
        Err(error) => {
            tracing::error!(request_id = %request_id, error = %error, "failed to read upstream body");
            (StatusCode::BAD_GATEWAY, "upstream request failed").into_response()
        }
    }
}

/// Join the upstream origin with the original path and query.
fn target_url(origin: &str, uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("{}{}", origin.trim_end_matches('/'), path_and_query)
}
