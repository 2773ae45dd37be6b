// ABOUTME: Core types for the Chefbot recipe API
// ABOUTME: Foundation crate with error handling and the recipe request/response models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

#![deny(unsafe_code)]

//! # Chefbot Core
//!
//! Foundation crate providing shared types for the Chefbot recipe API. It has no
//! knowledge of HTTP clients or language models, which keeps it cheap to compile
//! and easy to reuse from tests.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `RecipeRequest`, `Preferences` and `Recipe`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Recipe request and response models
pub mod models;
