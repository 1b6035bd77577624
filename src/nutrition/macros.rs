//! Daily calorie and macronutrient targets from body metrics.
//!
//! Energy expenditure follows Mifflin–St Jeor, scaled by an activity factor
//! and a goal adjustment, then split 30/30/40 between protein, fat and
//! carbohydrate.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Calorie adjustment for a weight-loss goal (15% deficit).
pub const LOSE_FACTOR: f64 = 0.85;
/// Calorie adjustment for a weight-gain goal (15% surplus).
pub const GAIN_FACTOR: f64 = 1.15;

pub const PROTEIN_SHARE: f64 = 0.30;
pub const FAT_SHARE: f64 = 0.30;
pub const CARBS_SHARE: f64 = 0.40;

// Atwater factors, kcal per gram
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

pub const DEFAULT_ACTIVITY: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// "male", ignoring case and surrounding whitespace, selects the male
    /// equation. Every other code selects the female one.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Anything other than "lose" or "gain" keeps energy at maintenance.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    fn factor(&self) -> f64 {
        match self {
            Goal::Lose => LOSE_FACTOR,
            Goal::Maintain => 1.0,
            Goal::Gain => GAIN_FACTOR,
        }
    }
}

/// Body metrics for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub activity_factor: f64,
    pub goal: Goal,
}

impl Default for AnthropometricInput {
    fn default() -> Self {
        Self {
            weight_kg: 0.0,
            height_cm: 0.0,
            age_years: 0,
            gender: Gender::Male,
            activity_factor: DEFAULT_ACTIVITY,
            goal: Goal::Maintain,
        }
    }
}

/// Anything that can supply body metrics: a stored profile, a guest session
/// snapshot, or a plain input value.
pub trait AnthropometricSource {
    fn anthropometrics(&self) -> Result<AnthropometricInput, InputError>;
}

impl AnthropometricSource for AnthropometricInput {
    fn anthropometrics(&self) -> Result<AnthropometricInput, InputError> {
        Ok(*self)
    }
}

/// Daily calorie and macro target, in kcal and grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTarget {
    pub kcal: u32,
    pub protein_g: u32,
    pub fat_g: u32,
    pub carbs_g: u32,
}

/// Rounds half away from zero and clamps negatives to 0.
pub(crate) fn round_non_negative(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.round() as u32
    }
}

/// Basal metabolic rate (Mifflin–St Jeor).
pub fn basal_metabolic_rate(input: &AnthropometricInput) -> f64 {
    let base = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age_years as f64;
    match input.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily energy need after activity and goal adjustment.
pub fn daily_energy(input: &AnthropometricInput) -> f64 {
    basal_metabolic_rate(input) * input.activity_factor * input.goal.factor()
}

/// Computes the daily target. No range checks are applied; zeroed metrics
/// give a small or all-zero target rather than an error.
pub fn calculate_macros(input: &AnthropometricInput) -> MacroTarget {
    let tdee = daily_energy(input).max(0.0);
    MacroTarget {
        kcal: round_non_negative(tdee),
        protein_g: round_non_negative(tdee * PROTEIN_SHARE / KCAL_PER_G_PROTEIN),
        fat_g: round_non_negative(tdee * FAT_SHARE / KCAL_PER_G_FAT),
        carbs_g: round_non_negative(tdee * CARBS_SHARE / KCAL_PER_G_CARBS),
    }
}

/// Reads metrics from any source and computes the target.
pub fn calculate_macros_from<S: AnthropometricSource + ?Sized>(
    source: &S,
) -> Result<MacroTarget, InputError> {
    let input = source.anthropometrics()?;
    Ok(calculate_macros(&input))
}
