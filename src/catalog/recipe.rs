use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type RecipeId = u32;

/// Diet tier of a recipe, ordered strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Vegan,
    Vege,
    Pesca,
    All,
}

impl DietType {
    pub fn all() -> &'static [DietType] {
        &[DietType::Vegan, DietType::Vege, DietType::Pesca, DietType::All]
    }

    pub fn code(&self) -> &'static str {
        match self {
            DietType::Vegan => "vegan",
            DietType::Vege => "vege",
            DietType::Pesca => "pesca",
            DietType::All => "all",
        }
    }
}

impl FromStr for DietType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Ok(DietType::Vegan),
            "vege" | "vegetarian" => Ok(DietType::Vege),
            "pesca" | "pescatarian" => Ok(DietType::Pesca),
            "all" | "omnivore" => Ok(DietType::All),
            other => Err(format!("unknown diet type: {}", other)),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Meal slot a recipe is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Snack,
    Lunch,
    Dinner,
}

impl MealType {
    /// Slots in the order they appear within a day.
    pub fn all() -> &'static [MealType] {
        &[MealType::Breakfast, MealType::Snack, MealType::Lunch, MealType::Dinner]
    }

    pub fn code(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Snack => "snack",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "snack" => Ok(MealType::Snack),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(format!("unknown meal type: {}", other)),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The diet tier a user asked to be served. Each preference allows a growing
/// set of recipe tiers: vegan ⊆ vege ⊆ pesca ⊆ all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    Vegan,
    Vege,
    Pesca,
    All,
}

impl DietPreference {
    /// Parses a stored preference code. Missing or unrecognized codes grant
    /// full catalog access.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().parse::<DietType>()) {
            Some(Ok(DietType::Vegan)) => DietPreference::Vegan,
            Some(Ok(DietType::Vege)) => DietPreference::Vege,
            Some(Ok(DietType::Pesca)) => DietPreference::Pesca,
            Some(Ok(DietType::All)) => DietPreference::All,
            Some(Err(_)) | None => {
                log::warn!(
                    "Unrecognized diet preference {:?}, falling back to full catalog access",
                    code
                );
                DietPreference::All
            }
        }
    }

    /// Recipe tiers this preference may be served.
    pub fn allowed_diet_types(&self) -> &'static [DietType] {
        match self {
            DietPreference::Vegan => &[DietType::Vegan],
            DietPreference::Vege => &[DietType::Vegan, DietType::Vege],
            DietPreference::Pesca => &[DietType::Vegan, DietType::Vege, DietType::Pesca],
            DietPreference::All => DietType::all(),
        }
    }

    /// The tier with the same name as the preference.
    pub fn as_diet_type(&self) -> DietType {
        match self {
            DietPreference::Vegan => DietType::Vegan,
            DietPreference::Vege => DietType::Vege,
            DietPreference::Pesca => DietType::Pesca,
            DietPreference::All => DietType::All,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub diet_type: DietType,
    pub meal_type: MealType,
    /// Expected positive; values <= 0 are tolerated by the planner.
    pub calories_per_100g: i32,
    pub protein_per_100g: f64,
    pub fat_per_100g: f64,
    pub carbs_per_100g: f64,
    /// Ingredient list with quantity and unit tokens, e.g. "Oats 60g, Milk 150ml".
    pub description: String,
    pub image_ref: Option<String>,
}
