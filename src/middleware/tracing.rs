// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and creates a span with status and latency for every HTTP request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

use std::time::Duration;

use axum::body::Body;
use axum::Router;
use http::{HeaderName, HeaderValue, Request, Response};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;
use uuid::Uuid;

use crate::constants::REQUEST_ID_HEADER;
use crate::logging::duration_ms;

/// Generates `req_<uuid>` request ids for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = format!("req_{}", Uuid::new_v4().simple());
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Wrap `router` with request id assignment, propagation, and request spans
///
/// An incoming `x-request-id` is kept; otherwise one is generated. The id is
/// echoed on the response and recorded on the request span.
pub fn with_request_tracing(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    create_request_span(request.method().as_str(), request.uri().path(), request_id)
                })
                .on_request(|_request: &Request<Body>, _span: &Span| {})
                .on_response(|response: &Response<Body>, latency: Duration, span: &Span| {
                    let status = response.status().as_u16();
                    let elapsed_ms = duration_ms(latency);
                    span.record("status_code", status);
                    span.record("duration_ms", elapsed_ms);

                    if response.status().is_server_error() {
                        tracing::error!(status, duration_ms = elapsed_ms, "request failed");
                    } else {
                        tracing::info!(status, duration_ms = elapsed_ms, "request completed");
                    }
                }),
        )
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}
