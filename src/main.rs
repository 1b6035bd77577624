use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use meal_planner::account::{ProfileStore, QuestionnaireAnswers, SessionSnapshot, UserId};
use meal_planner::catalog::{diet_showcase, load_recipe_catalog, InMemoryCatalog};
use meal_planner::cli::{parse_args, Command};
use meal_planner::config::Config;
use meal_planner::nutrition::{calculate_macros, validate_questionnaire, AnthropometricInput, Gender, Goal};
use meal_planner::service::{self, Viewer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let recipes = load_recipe_catalog(path)
        .with_context(|| format!("Failed to load recipe catalog from {:?}", path))?;
    Ok(InMemoryCatalog::new(recipes))
}

async fn load_session(path: &Path) -> Result<SessionSnapshot> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read session file {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse session file {:?}", path))
}

fn unknown_user(user: UserId) -> anyhow::Error {
    anyhow!("No profile for user {}. Run the questionnaire first.", user)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = parse_args();
    // Flags win over the environment and `.env`.
    let config = Config::from_env();
    let catalog_path = cli.catalog.unwrap_or(config.catalog_path);
    let profiles_path = cli.profiles.unwrap_or(config.profiles_path);
    let now = Utc::now();

    match cli.command {
        Command::Macros { weight, height, age, gender, activity, goal } => {
            let target = calculate_macros(&AnthropometricInput {
                weight_kg: weight,
                height_cm: height,
                age_years: age,
                gender: Gender::from_code(&gender),
                activity_factor: activity,
                goal: Goal::from_code(&goal),
            });
            print_json(&target)?;
        }
        Command::Questionnaire { user, age, weight, height, gender, activity, goal, diet, allergies } => {
            let metrics = validate_questionnaire(
                age.as_deref(),
                weight.as_deref(),
                height.as_deref(),
                gender.as_deref(),
            )?;
            let answers = QuestionnaireAnswers {
                goal: Goal::from_code(&goal),
                activity_factor: activity,
                metrics,
                diet_pref: diet,
                allergies,
            };
            let mut store = ProfileStore::load(&profiles_path)?;
            let target = store.get_or_create(user).apply_questionnaire(&answers);
            store.save()?;
            print_json(&target)?;
        }
        Command::Plan { user, session } => {
            let catalog = load_catalog(&catalog_path)?;
            let page = match (user, session) {
                (Some(user), _) => {
                    let store = ProfileStore::load(&profiles_path)?;
                    let profile = store.get(user).ok_or_else(|| unknown_user(user))?;
                    service::plan_page(Viewer::User(profile), &catalog, now)?
                }
                (None, Some(path)) => {
                    let session = load_session(&path).await?;
                    service::plan_page(Viewer::Guest(&session), &catalog, now)?
                }
                (None, None) => return Err(anyhow!("Either --user or --session is required")),
            };
            print_json(&page)?;
        }
        Command::Refresh { user } => {
            let mut store = ProfileStore::load(&profiles_path)?;
            let profile = store.get_mut(user).ok_or_else(|| unknown_user(user))?;
            let outcome = service::refresh_for(profile, now);
            store.save()?;
            print_json(&outcome)?;
        }
        Command::Status { user } => {
            let store = ProfileStore::load(&profiles_path)?;
            let profile = store.get(user).ok_or_else(|| unknown_user(user))?;
            let refresh = &profile.refresh;
            print_json(&serde_json::json!({
                "state": refresh.gate_state(now),
                "canRefresh": refresh.can_refresh(now),
                "daysLeft": refresh.days_until_next_refresh(now),
                "isSubscribed": refresh.has_active_subscription(now.date_naive()),
                "lastRefresh": refresh.last_refresh,
                "nextFreeRefresh": refresh.next_free_refresh(),
            }))?;
        }
        Command::Replace { user, meal_type, exclude } => {
            let catalog = load_catalog(&catalog_path)?;
            let store = ProfileStore::load(&profiles_path)?;
            let profile = store.get(user).ok_or_else(|| unknown_user(user))?;
            let mut rng = StdRng::from_entropy();
            let entry = service::replace_for(profile, &catalog, meal_type, exclude, now, &mut rng)?;
            print_json(&entry)?;
        }
        Command::Favorite { user, recipe } => {
            let catalog = load_catalog(&catalog_path)?;
            let mut store = ProfileStore::load(&profiles_path)?;
            let profile = store.get_mut(user).ok_or_else(|| unknown_user(user))?;
            let action = service::toggle_favorite(profile, &catalog, recipe)?;
            store.save()?;
            print_json(&serde_json::json!({ "recipeId": recipe, "status": action }))?;
        }
        Command::Diets => {
            let catalog = load_catalog(&catalog_path)?;
            let showcase = diet_showcase(&catalog, &mut rand::thread_rng());
            print_json(&showcase)?;
        }
    }

    Ok(())
}
