// ABOUTME: System-wide constants and configuration defaults for the recipe API
// ABOUTME: Environment variable names, upstream defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! # Constants Module
//!
//! Names of the environment variables the server reads and the defaults used
//! when they are absent. Configuration is environment-only; see
//! [`crate::config::environment::ServerConfig`].

/// Environment variable names
pub mod env_vars {
    /// Credential for the completion service
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// Base URL of the OpenAI-compatible completion service
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Model identifier sent with every completion request
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// Connect timeout for the completion service, in seconds
    pub const LLM_CONNECT_TIMEOUT_SECS: &str = "LLM_CONNECT_TIMEOUT_SECS";
    /// Overall request timeout for the completion service, in seconds
    pub const LLM_REQUEST_TIMEOUT_SECS: &str = "LLM_REQUEST_TIMEOUT_SECS";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment label
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format: pretty, json or compact
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source file and line in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids and names in log lines when set
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Emit span open/close events when set
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
    /// Service name reported in structured logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Default values
pub mod defaults {
    /// Public `OpenAI` endpoint
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    /// Model used for recipe generation
    pub const OPENAI_MODEL: &str = "gpt-4-turbo-preview";
    /// Connect timeout for the completion service
    pub const LLM_CONNECT_TIMEOUT_SECS: u64 = 30;
    /// Request timeout for the completion service (JSON recipe generation is slow)
    pub const LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
    /// Listen on every interface
    pub const HOST: &str = "0.0.0.0";
    /// Port the web frontend expects
    pub const HTTP_PORT: u16 = 8000;
    /// Deployment label
    pub const ENVIRONMENT: &str = "development";
}

/// Service identifiers used in logs and error messages
pub mod service_names {
    /// This server
    pub const CHEFBOT_SERVER: &str = "chefbot-server";
    /// Upstream completion service, as named in error details
    pub const OPENAI: &str = "OpenAI";
}

/// Recipe generation
pub mod recipes {
    /// Number of recipes requested from the model
    pub const RECIPES_PER_REQUEST: usize = 3;
    /// Key under which models commonly wrap the recipe array in JSON mode
    pub const WRAPPER_KEY: &str = "recipes";
}

/// Request header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
