// ABOUTME: Recipe generation route handler
// ABOUTME: Accepts ingredients and preferences and returns normalized recipes or a {"detail"} error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! Recipe routes
//!
//! `POST /api/recipes` is a thin wrapper around
//! [`RecipeGenerator::generate`](crate::recipes::RecipeGenerator::generate).
//! Every failure is logged and returned as `{"detail": <message>}`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chefbot_core::errors::AppError;
use chefbot_core::models::{Recipe, RecipeRequest};
use tracing::{error, warn};

use crate::server::ServerResources;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", post(Self::generate_recipes))
            .with_state(resources)
    }

    /// Generate recipes for the posted ingredients and preferences
    async fn generate_recipes(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RecipeRequest>, JsonRejection>,
    ) -> Result<Json<Vec<Recipe>>, AppError> {
        let Json(request) = payload.map_err(|rejection| {
            warn!(status = %rejection.status(), "Rejected recipe request body: {}", rejection.body_text());
            AppError::invalid_input(rejection.body_text())
        })?;

        match resources.recipe_generator.generate(&request).await {
            Ok(recipes) => Ok(Json(recipes)),
            Err(e) => {
                error!(code = ?e.code, "Error generating recipes: {}", e.message);
                Err(e)
            }
        }
    }
}
