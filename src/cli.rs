use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::account::UserId;
use crate::catalog::{MealType, RecipeId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Weekly meal plans from body metrics and diet preferences", long_about = None)]
pub struct Cli {
    /// Path to the recipe catalog CSV (overrides MEAL_PLANNER_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to the JSON profile store (overrides MEAL_PLANNER_PROFILES)
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute daily calorie and macro targets
    Macros {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: u32,
        #[arg(long, default_value = "male")]
        gender: String,
        #[arg(long, default_value_t = 1.2)]
        activity: f64,
        #[arg(long, default_value = "maintain")]
        goal: String,
    },
    /// Validate questionnaire answers and save them to a profile
    Questionnaire {
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        height: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long, default_value_t = 1.2)]
        activity: f64,
        #[arg(long, default_value = "maintain")]
        goal: String,
        /// One of all, pesca, vege, vegan
        #[arg(long)]
        diet: Option<String>,
        /// Comma-separated allergen words
        #[arg(long, value_delimiter = ',')]
        allergies: Vec<String>,
    },
    /// Print the weekly plan for a user or a guest session file
    Plan {
        #[arg(long, conflicts_with = "session", required_unless_present = "session")]
        user: Option<UserId>,
        /// JSON file holding guest session values
        #[arg(long)]
        session: Option<PathBuf>,
    },
    /// Use the free weekly refresh
    Refresh {
        #[arg(long)]
        user: UserId,
    },
    /// Show refresh and subscription status
    Status {
        #[arg(long)]
        user: UserId,
    },
    /// Swap one meal for another recipe (subscribers only)
    Replace {
        #[arg(long)]
        user: UserId,
        #[arg(long = "meal-type")]
        meal_type: MealType,
        #[arg(long)]
        exclude: RecipeId,
    },
    /// Add or remove a favorite recipe
    Favorite {
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        recipe: RecipeId,
    },
    /// Show the diet categories with sample recipes
    Diets,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
