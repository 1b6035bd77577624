use serde::{Deserialize, Serialize};

use crate::catalog::{MealType, Recipe, RecipeId};
use crate::ingredient_scaler::scale_ingredients;
use crate::nutrition::macros::round_non_negative;
use crate::nutrition::MacroTarget;
use super::slots::MealSlot;

/// One served meal: a recipe rescaled to its slot's share of the daily target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: RecipeId,
    pub slot_label: String,
    pub slot_key: MealType,
    pub title: String,
    /// Portion weight in grams.
    pub weight: u32,
    pub kcal: u32,
    pub protein: u32,
    pub fat: u32,
    pub carbs: u32,
    pub image_ref: Option<String>,
    pub ingredients_text: String,
}

/// Portion multiplier relative to the recipe's 100 g reference.
///
/// Recipes with non-positive calories cannot be scaled to a calorie share and
/// are served at the reference portion.
pub fn portion_multiplier(target: &MacroTarget, slot: &MealSlot, recipe: &Recipe) -> f64 {
    if recipe.calories_per_100g <= 0 {
        log::warn!(
            "Recipe {} ({}) has non-positive calories ({}), serving the 100 g reference portion",
            recipe.id,
            recipe.title,
            recipe.calories_per_100g
        );
        return 1.0;
    }
    (target.kcal as f64 * slot.ratio) / recipe.calories_per_100g as f64
}

pub fn build_meal_entry(target: &MacroTarget, slot: &MealSlot, recipe: &Recipe) -> MealEntry {
    let multiplier = portion_multiplier(target, slot, recipe);
    MealEntry {
        id: recipe.id,
        slot_label: slot.label.to_string(),
        slot_key: slot.meal_type,
        title: recipe.title.clone(),
        weight: round_non_negative(100.0 * multiplier),
        kcal: round_non_negative(recipe.calories_per_100g as f64 * multiplier),
        protein: round_non_negative(recipe.protein_per_100g * multiplier),
        fat: round_non_negative(recipe.fat_per_100g * multiplier),
        carbs: round_non_negative(recipe.carbs_per_100g * multiplier),
        image_ref: recipe.image_ref.clone(),
        ingredients_text: scale_ingredients(&recipe.description, multiplier),
    }
}
