// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads bind address, upstream LLM settings, and the API credential once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! Environment-based configuration management
//!
//! Configuration is read exactly once, when the server starts, and then shared
//! read-only by every request. A missing `OPENAI_API_KEY` is *not* a startup
//! failure: the server still comes up, and the recipe endpoint reports the
//! missing credential per request.

use crate::constants::{defaults, env_vars};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Deployment environment label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings for the upstream completion service
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API credential; `None` when the environment does not provide one
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::OPENAI_BASE_URL.to_owned(),
            model: defaults::OPENAI_MODEL.to_owned(),
            connect_timeout_secs: defaults::LLM_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: defaults::LLM_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Upstream completion service
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads the process environment only; the binary loads `.env` into it
    /// before logging starts.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable (port, timeouts) is set but does
    /// not parse.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Used by [`Self::from_env`] and by tests that must not touch the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let config = Self {
            host: var_or(env_vars::HOST, defaults::HOST),
            http_port: parse_var(&lookup, env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&var_or(
                env_vars::ENVIRONMENT,
                defaults::ENVIRONMENT,
            )),
            llm: LlmConfig {
                api_key: lookup(env_vars::OPENAI_API_KEY).filter(|k| !k.trim().is_empty()),
                base_url: var_or(env_vars::OPENAI_BASE_URL, defaults::OPENAI_BASE_URL),
                model: var_or(env_vars::OPENAI_MODEL, defaults::OPENAI_MODEL),
                connect_timeout_secs: parse_var(
                    &lookup,
                    env_vars::LLM_CONNECT_TIMEOUT_SECS,
                    defaults::LLM_CONNECT_TIMEOUT_SECS,
                )?,
                request_timeout_secs: parse_var(
                    &lookup,
                    env_vars::LLM_REQUEST_TIMEOUT_SECS,
                    defaults::LLM_REQUEST_TIMEOUT_SECS,
                )?,
            },
        };

        if config.llm.api_key.is_none() {
            warn!(
                "{} is not set; recipe requests will fail until it is configured",
                env_vars::OPENAI_API_KEY
            );
        }

        Ok(config)
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Chefbot Recipe API Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - LLM Base URL: {}\n\
             - LLM Model: {}\n\
             - LLM API Key: {}\n\
             - LLM Timeouts: connect {}s, request {}s",
            self.bind_address(),
            self.environment,
            self.llm.base_url,
            self.llm.model,
            if self.llm.api_key.is_some() {
                "Configured"
            } else {
                "Missing"
            },
            self.llm.connect_timeout_secs,
            self.llm.request_timeout_secs,
        )
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        None => Ok(default),
    }
}
