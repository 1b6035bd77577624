use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::account::RefreshState;
use crate::catalog::{DietPreference, DietType, MealType, RecipeId, RecipeSource};
use crate::error::PlanError;
use crate::nutrition::MacroTarget;
use super::entry::{build_meal_entry, MealEntry};
use super::slots::slot_for;

/// Swaps a single served meal for another recipe of the same meal type.
///
/// Premium only: fails with `PermissionDenied` without an active
/// subscription, whatever the candidates. Candidates match the meal type,
/// are either of the preference's own tier or the `all` tier, and differ from
/// `exclude_id`. The pick is uniform over `rng`, which callers create fresh
/// per call.
#[allow(clippy::too_many_arguments)]
pub fn replace_meal<S, R>(
    meal_type: MealType,
    exclude_id: RecipeId,
    preference: DietPreference,
    target: &MacroTarget,
    refresh: &RefreshState,
    today: NaiveDate,
    catalog: &S,
    rng: &mut R,
) -> Result<MealEntry, PlanError>
where
    S: RecipeSource + ?Sized,
    R: Rng + ?Sized,
{
    if !refresh.has_active_subscription(today) {
        return Err(PlanError::PermissionDenied);
    }

    let candidates = catalog
        .query_by_diet_types(&[preference.as_diet_type(), DietType::All])
        .with_meal_type(meal_type)
        .excluding_id(exclude_id)
        .into_recipes();

    let recipe = candidates
        .choose(rng)
        .ok_or(PlanError::NotFound { meal_type })?;

    log::info!("Replacing {} recipe {} with {}", meal_type, exclude_id, recipe.id);
    Ok(build_meal_entry(target, slot_for(meal_type), recipe))
}
