//! Error types for the meal planner.

use thiserror::Error;

use crate::catalog::{MealType, RecipeId};

/// Errors raised while turning raw questionnaire or session values into
/// anthropometric input. These are detected before any calculation runs.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid number for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Errors returned by the planning and replacement pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("no recipes match the selected diet and allergen filters")]
    NoEligibleRecipes,

    #[error("meal replacement requires an active subscription")]
    PermissionDenied,

    #[error("no replacement candidates for {meal_type}")]
    NotFound { meal_type: MealType },

    #[error("unknown recipe id: {0}")]
    UnknownRecipe(RecipeId),

    #[error(transparent)]
    Input(#[from] InputError),
}
