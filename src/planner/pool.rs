use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Recipe;

/// Shuffled draw-without-replacement over one slot's eligible recipes.
///
/// Once every recipe has been served the same set is reshuffled with the
/// continuing generator, so repeats only happen after the pool is exhausted.
#[derive(Debug, Clone)]
pub struct RecipePool<'a> {
    recipes: Vec<&'a Recipe>,
    cursor: usize,
}

impl<'a> RecipePool<'a> {
    pub fn new<R: Rng + ?Sized>(mut recipes: Vec<&'a Recipe>, rng: &mut R) -> Self {
        recipes.shuffle(rng);
        Self { recipes, cursor: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Next recipe in draw order, or `None` forever if the pool is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'a Recipe> {
        if self.recipes.is_empty() {
            return None;
        }
        if self.cursor == self.recipes.len() {
            self.recipes.shuffle(rng);
            self.cursor = 0;
        }
        let recipe = self.recipes[self.cursor];
        self.cursor += 1;
        Some(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DietType, MealType, RecipeId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn recipes(n: u32) -> Vec<Recipe> {
        (1..=n)
            .map(|id| Recipe {
                id,
                title: format!("Snack {}", id),
                diet_type: DietType::Vegan,
                meal_type: MealType::Snack,
                calories_per_100g: 150,
                protein_per_100g: 3.0,
                fat_per_100g: 5.0,
                carbs_per_100g: 20.0,
                description: String::new(),
                image_ref: None,
            })
            .collect()
    }

    fn draw_ids(pool: &mut RecipePool<'_>, rng: &mut StdRng, n: usize) -> Vec<RecipeId> {
        (0..n).filter_map(|_| pool.draw(rng)).map(|r| r.id).collect()
    }

    #[test]
    fn test_each_cycle_serves_every_recipe_once() {
        let catalog = recipes(3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = RecipePool::new(catalog.iter().collect(), &mut rng);

        let ids = draw_ids(&mut pool, &mut rng, 9);
        assert_eq!(ids.len(), 9);
        for cycle in ids.chunks(3) {
            let unique: HashSet<_> = cycle.iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_empty_pool_never_yields() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = RecipePool::new(Vec::new(), &mut rng);
        assert!(pool.is_empty());
        assert!(draw_ids(&mut pool, &mut rng, 7).is_empty());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let catalog = recipes(5);
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let mut pool_a = RecipePool::new(catalog.iter().collect(), &mut rng_a);
        let mut pool_b = RecipePool::new(catalog.iter().collect(), &mut rng_b);

        assert_eq!(
            draw_ids(&mut pool_a, &mut rng_a, 12),
            draw_ids(&mut pool_b, &mut rng_b, 12)
        );
    }
}
