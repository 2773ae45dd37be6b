// ABOUTME: Normalization of raw model output into typed recipes
// ABOUTME: Unwraps the recipe list, repairs loose fields, then decodes strictly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! # Model Output Normalization
//!
//! Two stages:
//!
//! 1. The model's text is decoded into a permissive [`serde_json::Value`] and
//!    repaired: ids are renumbered from 1, a scalar `dietaryPreference` becomes
//!    a one-element list, and `emoji` fills a missing `image`.
//! 2. Each repaired element is decoded into a [`Recipe`]. A field that is still
//!    missing or has the wrong type after repair fails the whole request.

use chefbot_core::errors::{AppError, AppResult};
use chefbot_core::models::Recipe;
use serde_json::{Map, Value};

use crate::constants::recipes::WRAPPER_KEY;

const PARSE_ERROR_PREFIX: &str = "Failed to parse recipes from model response";

fn parse_error(detail: impl std::fmt::Display) -> AppError {
    AppError::serialization(format!("{PARSE_ERROR_PREFIX}: {detail}"))
}

/// Parse the completion text and return normalized, typed recipes
///
/// # Errors
///
/// Returns a serialization error if the text is not JSON, is not a recipe
/// list, or a recipe is missing a field after normalization.
pub fn parse_recipes(raw: &str) -> AppResult<Vec<Recipe>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| parse_error(&e).with_source(e))?;
    into_recipes(value)
}

/// Take the recipe list out of the parsed payload
///
/// JSON mode only allows objects at the top level, so models usually answer
/// `{"recipes": [...]}`. A bare array is accepted as-is.
///
/// # Errors
///
/// Returns a serialization error when no array is found.
pub fn unwrap_recipe_list(value: Value) -> AppResult<Vec<Value>> {
    let list = match value {
        Value::Object(mut map) if map.contains_key(WRAPPER_KEY) => {
            map.remove(WRAPPER_KEY).unwrap_or(Value::Null)
        }
        other => other,
    };

    match list {
        Value::Array(items) => Ok(items),
        other => Err(parse_error(format_args!(
            "expected a list of recipes, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Apply the field repairs to every element, in order
///
/// # Errors
///
/// Returns a serialization error if an element is not a JSON object.
pub fn normalize_recipes(items: Vec<Value>) -> AppResult<Vec<Value>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(Value::Object(normalize_recipe(map, index + 1))),
            other => Err(parse_error(format_args!(
                "recipe {} is {}, expected an object",
                index + 1,
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn normalize_recipe(mut recipe: Map<String, Value>, position: usize) -> Map<String, Value> {
    recipe.insert("id".to_owned(), Value::from(position));

    if let Some(Value::String(single)) = recipe.get("dietaryPreference") {
        let wrapped = Value::Array(vec![Value::String(single.clone())]);
        recipe.insert("dietaryPreference".to_owned(), wrapped);
    }

    if !recipe.contains_key("image") {
        if let Some(emoji) = recipe.get("emoji").cloned() {
            recipe.insert("image".to_owned(), emoji);
        }
    }

    recipe
}

/// Unwrap, normalize and decode a parsed payload
///
/// # Errors
///
/// Returns a serialization error naming the recipe position and the serde
/// failure when a normalized element does not decode.
pub fn into_recipes(value: Value) -> AppResult<Vec<Recipe>> {
    normalize_recipes(unwrap_recipe_list(value)?)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Recipe>(item)
                .map_err(|e| parse_error(format_args!("recipe {}: {e}", index + 1)).with_source(e))
        })
        .collect()
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
