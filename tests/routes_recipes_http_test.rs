// ABOUTME: HTTP integration tests for the recipe generation route
// ABOUTME: Drives POST /api/recipes through the full router with a stub completion provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chefbot_server::errors::AppError;
use chefbot_server::llm::{MessageRole, ResponseFormat};
use chefbot_server::models::Recipe;
use helpers::axum_test::AxumTestRequest;
use helpers::stub_provider::StubLlmProvider;
use helpers::{raw_recipe, recipe_request_body, test_app};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// ============================================================================
// Successful generation
// ============================================================================

#[tokio::test]
async fn test_three_recipes_are_renumbered() {
    let completion = json!([
        raw_recipe(7, "Teriyaki Bowl"),
        raw_recipe(7, "Chicken Fried Rice"),
        raw_recipe(99, "Broccoli Stir Fry"),
    ]);
    let provider = StubLlmProvider::replying(completion.to_string());

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider.clone()))
        .await;

    assert_eq!(response.status(), 200);
    let recipes: Vec<Recipe> = response.json();
    assert_eq!(recipes.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(recipes[1].title, "Chicken Fried Rice");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_wrapped_recipes_are_unwrapped_and_normalized() {
    let completion = json!({
        "recipes": [
            {
                "title": "Vegan Chili",
                "ingredients": ["beans", "tomato"],
                "cookingTime": "Long",
                "mealType": "Dinner",
                "dietaryPreference": "vegan",
                "description": "Smoky and hearty.",
                "emoji": "🍲"
            },
            {
                "title": "Tomato Soup",
                "ingredients": ["tomato"],
                "cookingTime": "Fast",
                "mealType": "Lunch",
                "dietaryPreference": ["Vegetarian"],
                "description": "Silky.",
                "image": "🍅",
                "emoji": "🥣"
            }
        ]
    });
    let provider = StubLlmProvider::replying(completion.to_string());

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["dietaryPreference"], json!(["vegan"]));
    assert_eq!(body[0]["image"], "🍲");
    assert_eq!(body[1]["id"], 2);
    assert_eq!(body[1]["image"], "🍅");
    assert!(body[0].get("emoji").is_none());
}

#[tokio::test]
async fn test_request_is_forwarded_with_persona_and_json_mode() {
    let provider = StubLlmProvider::replying(json!({"recipes": []}).to_string());

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider.clone()))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!([]));

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model.as_deref(), Some("gpt-4-turbo-preview"));
    assert_eq!(request.response_format, ResponseFormat::JsonObject);
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert_eq!(request.messages[1].role, MessageRole::User);
    assert!(request.messages[1]
        .content
        .starts_with("Given these ingredients: chicken, rice, broccoli"));
    assert!(request.messages[1].content.contains("- Meal Type: Dinner"));
}

#[tokio::test]
async fn test_empty_ingredients_are_accepted() {
    let provider = StubLlmProvider::replying(json!([raw_recipe(1, "Pantry Pasta")]).to_string());
    let mut body = recipe_request_body();
    body["ingredients"] = json!([]);
    body["preferences"]["dietaryPreference"] = json!([]);

    let response = AxumTestRequest::post("/api/recipes")
        .json(&body)
        .send(test_app(provider.clone()))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(provider.calls(), 1);
}

// ============================================================================
// Failures surface as 500 {"detail": ...}
// ============================================================================

#[tokio::test]
async fn test_missing_api_key_fails_without_upstream_call() {
    let provider = StubLlmProvider::unconfigured();

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider.clone()))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"detail": "OpenAI API key not found in environment variables"})
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_non_json_completion_is_a_server_error() {
    let provider = StubLlmProvider::replying("Here are some recipes you might enjoy!");

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Failed to parse recipes from model response"));
    assert!(detail.contains("expected value"));
}

#[tokio::test]
async fn test_missing_field_is_a_server_error() {
    let mut recipe = raw_recipe(1, "Untitled");
    recipe.as_object_mut().unwrap().remove("title");
    let provider = StubLlmProvider::replying(json!([recipe]).to_string());

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("missing field `title`"));
}

#[tokio::test]
async fn test_non_list_payload_is_a_server_error() {
    let provider = StubLlmProvider::replying(json!({"title": "Just one"}).to_string());

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("expected a list of recipes"));
}

#[tokio::test]
async fn test_upstream_error_message_is_forwarded() {
    let provider = StubLlmProvider::failing(|| {
        AppError::external_service("OpenAI", "You exceeded your current quota")
    });

    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe_request_body())
        .send(test_app(provider.clone()))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"detail": "OpenAI: You exceeded your current quota"})
    );
    assert_eq!(provider.calls(), 1);
}

// ============================================================================
// Request body rejection
// ============================================================================

#[tokio::test]
async fn test_malformed_body_is_rejected_before_generation() {
    let provider = StubLlmProvider::replying("[]");

    let response = AxumTestRequest::post("/api/recipes")
        .raw_json("{\"ingredients\": [")
        .send(test_app(provider.clone()))
        .await;

    assert_eq!(response.status(), 422);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_body_missing_preferences_is_rejected() {
    let provider = StubLlmProvider::replying("[]");

    let response = AxumTestRequest::post("/api/recipes")
        .json(&json!({"ingredients": ["egg"]}))
        .send(test_app(provider.clone()))
        .await;

    assert_eq!(response.status(), 422);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("preferences"));
    assert_eq!(provider.calls(), 0);
}
