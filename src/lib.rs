// ABOUTME: Main library entry point for the Chefbot recipe API
// ABOUTME: Turns ingredients and meal preferences into LLM-generated recipes over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

#![deny(unsafe_code)]

//! # Chefbot Recipe API
//!
//! An HTTP service that accepts a list of ingredients plus meal preferences,
//! asks an OpenAI-compatible chat model for three recipes in JSON mode, and
//! returns them normalized.
//!
//! ## Endpoints
//!
//! - `GET /` reports that the service is running
//! - `POST /api/recipes` generates recipes
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --bin chefbot-server
//! ```

/// Environment-driven configuration
pub mod config;

/// Environment variable names and defaults
pub mod constants;

/// Logging configuration and structured log events
pub mod logging;

/// Completion provider abstraction and `OpenAI` client
pub mod llm;

/// HTTP middleware
pub mod middleware;

/// Prompt assembly, output normalization, and the recipe generator
pub mod recipes;

/// HTTP route handlers
pub mod routes;

/// Server resources, router assembly, and the serve loop
pub mod server;

pub use chefbot_core::{errors, models};
