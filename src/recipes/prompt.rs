// ABOUTME: User prompt rendering for recipe generation requests
// ABOUTME: Turns ingredients and preferences into the instruction sent to the model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

use chefbot_core::models::RecipeRequest;

use crate::constants::recipes::RECIPES_PER_REQUEST;

/// Render the user prompt for a recipe request
///
/// Empty ingredient and preference lists are rendered as empty strings; the
/// model is left to cope with them.
#[must_use]
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let ingredients = request.ingredients.join(", ");
    let preferences = &request.preferences;
    let dietary = preferences.dietary_preference.join(", ");

    format!(
        "Given these ingredients: {ingredients}\n\
         And these preferences:\n\
         - Meal Type: {meal_type}\n\
         - Dietary Preferences: {dietary}\n\
         - Cooking Time: {cooking_time}\n\
         \n\
         Generate {RECIPES_PER_REQUEST} creative and delicious recipes. For each recipe, provide:\n\
         1. A creative title\n\
         2. List of ingredients (including the ones provided)\n\
         3. Cooking time (Fast/Medium/Long)\n\
         4. Meal type (Breakfast/Lunch/Dinner/Dessert)\n\
         5. Dietary preferences (as a list/array)\n\
         6. A brief, appetizing description\n\
         7. An emoji that best represents the dish\n\
         \n\
         Format the response as a JSON array of objects with these fields:\n\
         id, title, ingredients, cookingTime, mealType, dietaryPreference (as array), description, image (use the emoji as the image value)",
        meal_type = preferences.meal_type,
        cooking_time = preferences.cooking_time,
    )
}
