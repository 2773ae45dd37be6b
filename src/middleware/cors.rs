// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Accepts any origin, method, and header with credentials for the web frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Configure CORS for the recipe API
///
/// Every origin, method and header is accepted and credentials are allowed.
/// Browsers refuse a literal `*` together with
/// `Access-Control-Allow-Credentials: true`, so the layer echoes back the
/// origin, method and headers of each request instead.
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
