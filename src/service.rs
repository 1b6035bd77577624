//! Glue between stored accounts, the catalog and the planner.
//!
//! Every function takes the clock and, where randomness is needed, the
//! generator from the caller, so the same inputs give the same page.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::account::{FavoriteAction, RefreshOutcome, SessionSnapshot, UserProfile};
use crate::catalog::{MealType, RecipeId, RecipeSource};
use crate::error::{InputError, PlanError};
use crate::nutrition::calculate_macros_from;
use crate::planner::{generate_weekly_plan, replace_meal, MealEntry, PlanSeed, SeedIdentity};
use crate::response::{PlanPage, PlanResponse};

/// Who is looking at the plan.
#[derive(Debug, Clone, Copy)]
pub enum Viewer<'a> {
    User(&'a UserProfile),
    Guest(&'a SessionSnapshot),
}

pub fn plan_page<S>(viewer: Viewer<'_>, catalog: &S, now: DateTime<Utc>) -> Result<PlanPage, PlanError>
where
    S: RecipeSource + ?Sized,
{
    let planned = match viewer {
        Viewer::User(profile) => {
            // The stored target only marks a completed questionnaire; the
            // plan always uses metrics as they are now.
            if profile.target.is_none() {
                return Err(InputError::MissingField("target").into());
            }
            let target = calculate_macros_from(profile)?;
            let seed = PlanSeed::new(
                SeedIdentity::User(profile.user_id),
                now,
                profile.refresh.last_refresh,
            );
            generate_weekly_plan(
                &target,
                profile.diet_preference(),
                &[profile.allergies.as_str()],
                catalog,
                &seed,
            )
            .map(|plan| {
                let refresh = &profile.refresh;
                PlanResponse {
                    days: plan.days,
                    macros: target,
                    is_guest: false,
                    can_refresh: refresh.can_refresh(now),
                    days_left: refresh.days_until_next_refresh(now),
                    is_subscribed: refresh.has_active_subscription(now.date_naive()),
                    favorite_recipe_ids: profile.favorites.ids(),
                }
            })
        }
        Viewer::Guest(session) => {
            if !session.has_metrics() {
                return Err(InputError::MissingField("age").into());
            }
            let target = calculate_macros_from(session)?;
            let allergies = session.allergies()?;
            let seed = PlanSeed::new(SeedIdentity::Guest, now, None);
            generate_weekly_plan(
                &target,
                session.diet_preference()?,
                allergies.as_slice(),
                catalog,
                &seed,
            )
            .map(|plan| PlanResponse::guest(plan, target))
        }
    };

    match planned {
        Ok(response) => Ok(PlanPage::Plan(response)),
        Err(PlanError::NoEligibleRecipes) => Ok(PlanPage::empty()),
        Err(e) => Err(e),
    }
}

pub fn refresh_for(profile: &mut UserProfile, now: DateTime<Utc>) -> RefreshOutcome {
    profile.refresh.refresh(now)
}

/// Premium meal swap using the profile's current metrics.
pub fn replace_for<S, R>(
    profile: &UserProfile,
    catalog: &S,
    meal_type: MealType,
    exclude_id: RecipeId,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<MealEntry, PlanError>
where
    S: RecipeSource + ?Sized,
    R: Rng + ?Sized,
{
    if !profile.refresh.has_active_subscription(now.date_naive()) {
        return Err(PlanError::PermissionDenied);
    }
    let target = calculate_macros_from(profile)?;
    replace_meal(
        meal_type,
        exclude_id,
        profile.diet_preference(),
        &target,
        &profile.refresh,
        now.date_naive(),
        catalog,
        rng,
    )
}

pub fn toggle_favorite<S>(
    profile: &mut UserProfile,
    catalog: &S,
    recipe_id: RecipeId,
) -> Result<FavoriteAction, PlanError>
where
    S: RecipeSource + ?Sized,
{
    if catalog.find(recipe_id).is_none() {
        return Err(PlanError::UnknownRecipe(recipe_id));
    }
    let action = profile.favorites.toggle(recipe_id);
    log::info!("User {} favorite {}: {:?}", profile.user_id, recipe_id, action);
    Ok(action)
}
