use super::recipe::{DietType, MealType, Recipe, RecipeId};

/// Read-only view of the recipe catalog.
///
/// Implementors only need to expose their recipes; the filtering operations
/// used by the planner are provided on top of that.
pub trait RecipeSource {
    fn recipes(&self) -> &[Recipe];

    fn query_by_diet_types(&self, allowed: &[DietType]) -> RecipeQuery<'_> {
        RecipeQuery {
            recipes: self
                .recipes()
                .iter()
                .filter(|r| allowed.contains(&r.diet_type))
                .collect(),
        }
    }

    fn find(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes().iter().find(|r| r.id == id)
    }
}

/// A narrowing query over catalog recipes.
#[derive(Debug, Clone)]
pub struct RecipeQuery<'a> {
    recipes: Vec<&'a Recipe>,
}

impl<'a> RecipeQuery<'a> {
    /// Drops every recipe whose description contains `needle`, ignoring case.
    pub fn exclude_description_contains(mut self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        self.recipes
            .retain(|r| !r.description.to_lowercase().contains(&needle));
        self
    }

    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.recipes.retain(|r| r.meal_type == meal_type);
        self
    }

    pub fn excluding_id(mut self, id: RecipeId) -> Self {
        self.recipes.retain(|r| r.id != id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn into_recipes(self) -> Vec<&'a Recipe> {
        self.recipes
    }
}

/// Catalog snapshot held in memory, typically loaded from CSV.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
}

impl InMemoryCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl RecipeSource for InMemoryCatalog {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}
