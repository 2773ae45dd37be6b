// ABOUTME: Route module organization for the recipe API HTTP endpoints
// ABOUTME: Status and recipe routes, merged into one router by the server module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! Route module for the recipe API
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the recipe generator.

/// Recipe generation routes
pub mod recipes;
/// Root status route
pub mod root;

/// Recipe generation route handlers
pub use recipes::RecipeRoutes;
/// Root status route handler
pub use root::{RootRoutes, StatusResponse};
