// ABOUTME: Recipe generator service wiring prompts, the LLM provider, and normalization
// ABOUTME: Fails fast on a missing credential and makes one completion call per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

use std::sync::Arc;
use std::time::Instant;

use chefbot_core::errors::{AppError, AppResult};
use chefbot_core::models::{Recipe, RecipeRequest};
use tracing::{debug, instrument};

use super::normalize::parse_recipes;
use super::prompt::build_recipe_prompt;
use crate::llm::prompts::get_recipe_system_prompt;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider, ResponseFormat};
use crate::logging::{duration_ms, AppLogger};

/// Detail returned when the completion service credential is absent
pub const MISSING_API_KEY_MESSAGE: &str = "OpenAI API key not found in environment variables";

/// Generates recipes for a request through a completion provider
///
/// Holds no per-request state; one instance is shared by every request.
#[derive(Clone)]
pub struct RecipeGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl RecipeGenerator {
    /// Create a generator that asks `provider` for `model`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Create a generator using the provider's default model
    #[must_use]
    pub fn with_default_model(provider: Arc<dyn LlmProvider>) -> Self {
        let model = provider.default_model().to_owned();
        Self::new(provider, model)
    }

    /// Model identifier sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the chat request for a recipe request
    ///
    /// JSON mode is requested when the provider supports it; otherwise the
    /// prompts alone ask for JSON and the parser still enforces it.
    #[must_use]
    pub fn build_chat_request(&self, request: &RecipeRequest) -> ChatRequest {
        let response_format = if self.provider.capabilities().supports_json_mode() {
            ResponseFormat::JsonObject
        } else {
            ResponseFormat::Text
        };

        ChatRequest::new(vec![
            ChatMessage::system(get_recipe_system_prompt()),
            ChatMessage::user(build_recipe_prompt(request)),
        ])
        .with_model(self.model.clone())
        .with_response_format(response_format)
    }

    /// Generate recipes for `request`
    ///
    /// # Errors
    ///
    /// - `ConfigMissing` when the provider has no credential; no call is made
    /// - the provider's error when the completion call fails
    /// - `SerializationError` when the output is not a usable recipe list
    #[instrument(skip(self, request), fields(model = %self.model, ingredients = request.ingredients.len()))]
    pub async fn generate(&self, request: &RecipeRequest) -> AppResult<Vec<Recipe>> {
        if !self.provider.is_configured() {
            return Err(AppError::config_missing(MISSING_API_KEY_MESSAGE));
        }

        let started = Instant::now();
        let chat_request = self.build_chat_request(request);
        let response = self.provider.complete(&chat_request).await?;

        debug!(
            model = %response.model,
            finish_reason = ?response.finish_reason,
            "Parsing recipe completion ({} chars)",
            response.content.len()
        );

        let recipes = parse_recipes(&response.content)?;

        AppLogger::log_recipe_generation(
            request.ingredients.len(),
            recipes.len(),
            duration_ms(started.elapsed()),
        );

        Ok(recipes)
    }
}
