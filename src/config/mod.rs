// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server and LLM configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! Configuration module for the Chefbot recipe API

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LlmConfig, ServerConfig};
