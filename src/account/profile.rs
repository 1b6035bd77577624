use serde::{Deserialize, Serialize};

use crate::catalog::DietPreference;
use crate::error::InputError;
use crate::nutrition::{
    calculate_macros, AnthropometricInput, AnthropometricSource, Gender, Goal, MacroTarget,
    ValidatedMetrics,
};
use super::favorites::Favorites;
use super::refresh_gate::RefreshState;

pub type UserId = u64;

/// Everything collected by the three questionnaire steps.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireAnswers {
    pub goal: Goal,
    pub activity_factor: f64,
    pub metrics: ValidatedMetrics,
    pub diet_pref: Option<String>,
    pub allergies: Vec<String>,
}

/// A registered user's stored profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub username: String,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<Gender>,
    pub goal: Option<Goal>,
    pub activity: Option<f64>,
    pub diet_pref: Option<String>,
    #[serde(default)]
    pub allergies: String,
    /// Stored result of the last questionnaire; `None` until completed.
    pub target: Option<MacroTarget>,
    #[serde(default)]
    pub favorites: Favorites,
    #[serde(default)]
    pub refresh: RefreshState,
}

impl UserProfile {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn diet_preference(&self) -> DietPreference {
        DietPreference::from_code(self.diet_pref.as_deref())
    }

    /// Stores the answers and recomputes the saved target.
    pub fn apply_questionnaire(&mut self, answers: &QuestionnaireAnswers) -> MacroTarget {
        self.goal = Some(answers.goal);
        self.activity = Some(answers.activity_factor);
        self.age = Some(answers.metrics.age_years);
        self.weight = Some(answers.metrics.weight_kg);
        self.height = Some(answers.metrics.height_cm);
        self.gender = Some(answers.metrics.gender);
        self.diet_pref = answers.diet_pref.clone();
        self.allergies = answers.allergies.join(",");

        let target = calculate_macros(&AnthropometricInput {
            weight_kg: answers.metrics.weight_kg,
            height_cm: answers.metrics.height_cm,
            age_years: answers.metrics.age_years,
            gender: answers.metrics.gender,
            activity_factor: answers.activity_factor,
            goal: answers.goal,
        });
        self.target = Some(target);
        target
    }
}

impl AnthropometricSource for UserProfile {
    fn anthropometrics(&self) -> Result<AnthropometricInput, InputError> {
        Ok(AnthropometricInput {
            weight_kg: self.weight.ok_or(InputError::MissingField("weight"))?,
            height_cm: self.height.ok_or(InputError::MissingField("height"))?,
            age_years: self.age.ok_or(InputError::MissingField("age"))?,
            gender: self.gender.ok_or(InputError::MissingField("gender"))?,
            activity_factor: self.activity.ok_or(InputError::MissingField("activity"))?,
            goal: self.goal.unwrap_or_default(),
        })
    }
}
