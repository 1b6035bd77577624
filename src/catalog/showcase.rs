use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::recipe::{DietType, Recipe};
use super::source::RecipeSource;

const SAMPLES_PER_DIET: usize = 2;

/// A diet category with a couple of sample recipes, used to present the
/// available tiers before the questionnaire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietShowcase {
    pub slug: DietType,
    pub name: &'static str,
    pub description: &'static str,
    pub samples: Vec<Recipe>,
}

fn describe(diet_type: DietType) -> (&'static str, &'static str) {
    match diet_type {
        DietType::All => ("Omnivore", "Classic diet without restrictions."),
        DietType::Pesca => ("Pescatarian", "No meat, but fish and seafood."),
        DietType::Vege => ("Vegetarian", "Plant food plus dairy and eggs."),
        DietType::Vegan => ("Vegan", "Strictly plant-based."),
    }
}

/// Builds one showcase entry per tier, least strict first. Samples are drawn
/// from recipes of exactly that tier; a tier without recipes gets none.
pub fn diet_showcase<S: RecipeSource + ?Sized, R: Rng + ?Sized>(
    catalog: &S,
    rng: &mut R,
) -> Vec<DietShowcase> {
    DietType::all()
        .iter()
        .rev()
        .map(|&diet_type| {
            let tier: Vec<&Recipe> = catalog.query_by_diet_types(&[diet_type]).into_recipes();
            let samples = tier
                .choose_multiple(rng, SAMPLES_PER_DIET.min(tier.len()))
                .map(|r| (*r).clone())
                .collect();
            let (name, description) = describe(diet_type);
            DietShowcase {
                slug: diet_type,
                name,
                description,
                samples,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, MealType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn recipe(id: u32, diet_type: DietType) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {}", id),
            diet_type,
            meal_type: MealType::Dinner,
            calories_per_100g: 250,
            protein_per_100g: 10.0,
            fat_per_100g: 5.0,
            carbs_per_100g: 40.0,
            description: String::new(),
            image_ref: None,
        }
    }

    #[test]
    fn test_diet_showcase_samples_exact_tier() {
        let catalog = InMemoryCatalog::new(vec![
            recipe(1, DietType::Vegan),
            recipe(2, DietType::Vegan),
            recipe(3, DietType::Vegan),
            recipe(4, DietType::Pesca),
        ]);
        let mut rng = StdRng::seed_from_u64(7);

        let showcase = diet_showcase(&catalog, &mut rng);
        assert_eq!(showcase.len(), 4);
        assert_eq!(showcase[0].slug, DietType::All);
        assert!(showcase[0].samples.is_empty());

        let pesca = showcase.iter().find(|d| d.slug == DietType::Pesca).unwrap();
        assert_eq!(pesca.samples.len(), 1);

        let vegan = showcase.iter().find(|d| d.slug == DietType::Vegan).unwrap();
        assert_eq!(vegan.samples.len(), 2);
        assert!(vegan.samples.iter().all(|r| r.diet_type == DietType::Vegan));
    }
}
