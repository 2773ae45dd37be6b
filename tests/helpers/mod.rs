// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-memory HTTP driver, the stub provider, and app builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod stub_provider;

use std::sync::Arc;

use chefbot_server::config::ServerConfig;
use chefbot_server::llm::LlmProvider;
use chefbot_server::server::{build_router, ServerResources};
use serde_json::{json, Value};

/// Full application router backed by `provider` and default configuration
pub fn test_app(provider: Arc<dyn LlmProvider>) -> axum::Router {
    let resources = ServerResources::new(Arc::new(ServerConfig::default()), provider);
    build_router(Arc::new(resources))
}

/// A typical request body for `POST /api/recipes`
pub fn recipe_request_body() -> Value {
    json!({
        "ingredients": ["chicken", "rice", "broccoli"],
        "preferences": {
            "mealType": "Dinner",
            "dietaryPreference": ["Gluten-Free"],
            "cookingTime": "Medium"
        }
    })
}

/// A complete raw recipe as a model would return it
pub fn raw_recipe(id: u32, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "ingredients": ["chicken", "rice", "broccoli"],
        "cookingTime": "Medium",
        "mealType": "Dinner",
        "dietaryPreference": ["Gluten-Free"],
        "description": "A comforting one-pan dinner.",
        "image": "🍗"
    })
}
