pub mod loader;
pub mod recipe;
pub mod showcase;
pub mod source;

pub use loader::load_recipe_catalog;
pub use recipe::{DietPreference, DietType, MealType, Recipe, RecipeId};
pub use showcase::{diet_showcase, DietShowcase};
pub use source::{InMemoryCatalog, RecipeQuery, RecipeSource};
