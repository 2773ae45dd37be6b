// ABOUTME: Recipe generation pipeline from request to normalized recipe list
// ABOUTME: Prompt assembly, model output normalization, and the generator service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! # Recipe Generation
//!
//! Request → prompt → completion → JSON parse → normalization → typed recipes.
//! Each step is a separate module so the pure parts can be tested without a
//! completion service.

mod generator;
pub mod normalize;
pub mod prompt;

pub use generator::{RecipeGenerator, MISSING_API_KEY_MESSAGE};
pub use normalize::{into_recipes, normalize_recipes, parse_recipes};
pub use prompt::build_recipe_prompt;
