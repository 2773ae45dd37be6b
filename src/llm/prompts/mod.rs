// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the chef persona used for every recipe generation request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Chef persona sent as the system message of every recipe request
///
/// Steers the model towards JSON output, list-valued `dietaryPreference`,
/// and an emoji in the `image` field.
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("recipe_system.md");

/// Get the recipe generator system prompt, without the trailing newline of
/// the source file
#[must_use]
pub fn get_recipe_system_prompt() -> &'static str {
    RECIPE_SYSTEM_PROMPT.trim_end()
}
