// ABOUTME: Recipe request and recipe response models
// ABOUTME: Defines Preferences, RecipeRequest and Recipe with their camelCase wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

use serde::{Deserialize, Serialize};

/// Meal preferences supplied by the caller
///
/// Values are free-form. The frontend offers small vocabularies
/// ("Breakfast"/"Lunch"/"Dinner"/"Dessert", "Fast"/"Medium"/"Long") but the
/// server passes whatever it receives straight into the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Meal type, e.g. "Dinner"
    pub meal_type: String,
    /// Dietary preferences, e.g. `["Vegetarian", "Gluten-Free"]`
    pub dietary_preference: Vec<String>,
    /// Cooking time category, e.g. "Fast"
    pub cooking_time: String,
}

/// Body of `POST /api/recipes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Ingredients the user has on hand; may be empty
    pub ingredients: Vec<String>,
    /// Meal preferences
    pub preferences: Preferences,
}

/// A generated recipe as returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// 1-based rank within the returned list
    pub id: u32,
    /// Recipe title
    pub title: String,
    /// Ingredient list
    pub ingredients: Vec<String>,
    /// Cooking time category
    pub cooking_time: String,
    /// Meal type category
    pub meal_type: String,
    /// Dietary preferences the recipe satisfies
    pub dietary_preference: Vec<String>,
    /// Short description
    pub description: String,
    /// A single emoji standing in for a picture of the dish
    pub image: String,
}
