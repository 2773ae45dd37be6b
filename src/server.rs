// ABOUTME: HTTP server assembly with shared resources, router, and graceful shutdown
// ABOUTME: Builds the provider once at startup and injects it into every route as axum state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! # Server
//!
//! [`ServerResources`] is created once per process and shared read-only by
//! every request. [`build_router`] is used both by [`run`] and by the
//! integration tests, which drive it in memory with `tower::ServiceExt`.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use chefbot_core::errors::AppResult;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::middleware::{setup_cors, with_request_tracing};
use crate::recipes::RecipeGenerator;
use crate::routes::{RecipeRoutes, RootRoutes};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Configuration loaded at startup
    pub config: Arc<ServerConfig>,
    /// Recipe generator bound to the completion service and configured model
    pub recipe_generator: RecipeGenerator,
}

impl ServerResources {
    /// Create resources around an existing provider
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, provider: Arc<dyn LlmProvider>) -> Self {
        let recipe_generator = RecipeGenerator::new(Arc::clone(&provider), config.llm.model.clone());
        Self {
            config,
            recipe_generator,
        }
    }

    /// Create resources with the `OpenAI`-compatible provider described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let provider =
            OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from_llm_config(&config.llm))?;
        info!(
            provider = provider.name(),
            display_name = provider.display_name(),
            model = %config.llm.model,
            configured = provider.is_configured(),
            "LLM provider initialized"
        );
        Ok(Self::new(Arc::new(config), Arc::new(provider)))
    }
}

/// Build the application router with all routes and middleware
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let routes = Router::new()
        .merge(RootRoutes::routes())
        .merge(RecipeRoutes::routes(resources));

    with_request_tracing(routes).layer(setup_cors())
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the provider cannot be created, the address cannot be
/// bound, or the server fails while running.
pub async fn run(config: ServerConfig) -> Result<()> {
    let resources = Arc::new(ServerResources::from_config(config)?);
    let bind_address = resources.config.bind_address();
    let app = build_router(resources);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!("Recipe API listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Recipe API stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_carry_config_and_model() {
        let mut config = ServerConfig {
            host: "127.0.0.1".to_owned(),
            http_port: 9123,
            ..ServerConfig::default()
        };
        config.llm.model = "gpt-4o-mini".to_owned();

        let resources = ServerResources::from_config(config).unwrap();

        assert_eq!(resources.config.bind_address(), "127.0.0.1:9123");
        assert_eq!(resources.recipe_generator.model(), "gpt-4o-mini");
    }
}
