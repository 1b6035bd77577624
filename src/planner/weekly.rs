use serde::{Deserialize, Serialize};

use crate::catalog::{DietPreference, Recipe, RecipeSource};
use crate::error::PlanError;
use crate::nutrition::MacroTarget;
use super::entry::{build_meal_entry, MealEntry};
use super::pool::RecipePool;
use super::seed::PlanSeed;
use super::slots::{DAY_LABELS, MEAL_SLOTS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub label: String,
    /// Up to one meal per slot, in slot order. Slots without eligible
    /// recipes are absent.
    pub meals: Vec<MealEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayEntry>,
}

impl WeeklyPlan {
    pub fn meals(&self) -> impl Iterator<Item = &MealEntry> {
        self.days.iter().flat_map(|d| d.meals.iter())
    }
}

/// Splits user allergen input into lowercase tokens. Each entry may itself
/// be a comma-separated list; blank tokens are dropped.
pub fn allergen_tokens<T: AsRef<str>>(allergens: &[T]) -> Vec<String> {
    allergens
        .iter()
        .flat_map(|a| a.as_ref().split(','))
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Recipes a user may be served: diet tier allowed by the preference and no
/// allergen token in the description.
pub fn eligible_recipes<'a, S, T>(
    catalog: &'a S,
    preference: DietPreference,
    allergens: &[T],
) -> Vec<&'a Recipe>
where
    S: RecipeSource + ?Sized,
    T: AsRef<str>,
{
    allergen_tokens(allergens)
        .iter()
        .fold(
            catalog.query_by_diet_types(preference.allowed_diet_types()),
            |query, token| query.exclude_description_contains(token),
        )
        .into_recipes()
}

/// Builds the seven-day plan.
///
/// The result depends only on the arguments: the same target, filters,
/// catalog snapshot and seed always give the same plan. When filtering
/// leaves nothing to serve, `PlanError::NoEligibleRecipes` is returned and no
/// partial plan is built.
pub fn generate_weekly_plan<S, T>(
    target: &MacroTarget,
    preference: DietPreference,
    allergens: &[T],
    catalog: &S,
    seed: &PlanSeed,
) -> Result<WeeklyPlan, PlanError>
where
    S: RecipeSource + ?Sized,
    T: AsRef<str>,
{
    let eligible = eligible_recipes(catalog, preference, allergens);
    if eligible.is_empty() {
        log::info!("No eligible recipes for preference {:?}", preference);
        return Err(PlanError::NoEligibleRecipes);
    }

    let mut rng = seed.rng();
    log::debug!("Generating plan with seed {} over {} recipes", seed, eligible.len());

    let mut pools: Vec<RecipePool<'_>> = MEAL_SLOTS
        .iter()
        .map(|slot| {
            let subset: Vec<&Recipe> = eligible
                .iter()
                .copied()
                .filter(|r| r.meal_type == slot.meal_type)
                .collect();
            log::debug!("Pool {}: {} recipes", slot.meal_type, subset.len());
            RecipePool::new(subset, &mut rng)
        })
        .collect();

    let days = DAY_LABELS
        .iter()
        .map(|label| {
            let meals = MEAL_SLOTS
                .iter()
                .zip(pools.iter_mut())
                .filter_map(|(slot, pool)| {
                    pool.draw(&mut rng)
                        .map(|recipe| build_meal_entry(target, slot, recipe))
                })
                .collect();
            DayEntry {
                label: label.to_string(),
                meals,
            }
        })
        .collect();

    Ok(WeeklyPlan { days })
}
