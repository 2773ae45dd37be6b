// ABOUTME: Root status route for liveness checks
// ABOUTME: Reports that the API is running without touching the completion service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `"ok"`
    pub status: String,
    /// Human-readable status line
    pub message: String,
}

/// Root routes implementation
pub struct RootRoutes;

impl RootRoutes {
    /// Create the status route
    pub fn routes() -> Router {
        async fn status_handler() -> Json<StatusResponse> {
            Json(StatusResponse {
                status: "ok".to_owned(),
                message: "Recipe API is running".to_owned(),
            })
        }

        Router::new().route("/", get(status_handler))
    }
}
