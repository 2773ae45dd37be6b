// ABOUTME: Core data models for the Chefbot recipe API
// ABOUTME: Re-exports the recipe request, preferences and recipe structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! # Data Models
//!
//! All models are transient: they live for a single request/response cycle and
//! are never persisted. Field names are serialized in camelCase to match the
//! JSON contract shared with the web frontend and with the model prompt.

mod recipe;

pub use recipe::{Preferences, Recipe, RecipeRequest};
