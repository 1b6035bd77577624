use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

use crate::catalog::DietPreference;
use crate::error::InputError;
use crate::nutrition::macros::DEFAULT_ACTIVITY;
use crate::nutrition::{AnthropometricInput, AnthropometricSource, Gender, Goal};
use super::profile::QuestionnaireAnswers;

const KEY_WEIGHT: &str = "weight";
const KEY_HEIGHT: &str = "height";
const KEY_AGE: &str = "age";
const KEY_GENDER: &str = "gender";
const KEY_ACTIVITY: &str = "activity";
const KEY_GOAL: &str = "goal";
const KEY_DIET: &str = "diet_pref";
const KEY_ALLERGIES: &str = "allergies";

/// Snapshot of a guest's session values, passed explicitly into planning.
///
/// Values may be JSON numbers or strings. Missing keys fall back to the
/// calculator defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionSnapshot {
    values: HashMap<String, Value>,
}

impl SessionSnapshot {
    pub fn new(values: HashMap<String, Value>) -> Self {
        Self { values }
    }

    pub fn from_answers(answers: &QuestionnaireAnswers) -> Self {
        let mut snapshot = Self::default();
        snapshot.apply_questionnaire(answers);
        snapshot
    }

    pub fn apply_questionnaire(&mut self, answers: &QuestionnaireAnswers) {
        let goal = match answers.goal {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        };
        let gender = match answers.metrics.gender {
            Gender::Male => "male",
            Gender::Female => "female",
        };
        self.set(KEY_GOAL, goal.into());
        self.set(KEY_ACTIVITY, answers.activity_factor.into());
        self.set(KEY_AGE, answers.metrics.age_years.into());
        self.set(KEY_WEIGHT, answers.metrics.weight_kg.into());
        self.set(KEY_HEIGHT, answers.metrics.height_cm.into());
        self.set(KEY_GENDER, gender.into());
        self.set(
            KEY_DIET,
            answers.diet_pref.clone().map(Value::from).unwrap_or(Value::Null),
        );
        self.set(KEY_ALLERGIES, answers.allergies.join(",").into());
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    fn invalid(key: &'static str, value: &Value) -> InputError {
        InputError::InvalidInput { field: key, value: value.to_string() }
    }

    fn number<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, InputError> {
        let raw = match self.values.get(key) {
            None | Some(Value::Null) => return Ok(default),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(other) => other.to_string(),
        };
        raw.parse::<T>()
            .map_err(|_| InputError::InvalidInput { field: key, value: raw })
    }

    /// Age in whole years. Whole-valued floats such as `30.0` are accepted.
    fn whole_years(&self, key: &'static str) -> Result<u32, InputError> {
        if let Ok(years) = self.number::<u32>(key, 0) {
            return Ok(years);
        }
        let value = self.number::<f64>(key, 0.0)?;
        if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
            Ok(value as u32)
        } else {
            Err(InputError::InvalidInput { field: key, value: value.to_string() })
        }
    }

    /// True once the body-metrics step has been filled in.
    pub fn has_metrics(&self) -> bool {
        match self.values.get(KEY_AGE) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// Missing or null means no preference. Any non-string value is rejected.
    pub fn diet_preference(&self) -> Result<DietPreference, InputError> {
        match self.values.get(KEY_DIET) {
            None | Some(Value::Null) => Ok(DietPreference::from_code(None)),
            Some(Value::String(code)) => Ok(DietPreference::from_code(Some(code.as_str()))),
            Some(other) => Err(Self::invalid(KEY_DIET, other)),
        }
    }

    /// Allergen entries, stored either as one comma-separated string or as a
    /// list of strings.
    pub fn allergies(&self) -> Result<Vec<String>, InputError> {
        match self.values.get(KEY_ALLERGIES) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(Self::invalid(KEY_ALLERGIES, other)),
                })
                .collect(),
            Some(other) => Err(Self::invalid(KEY_ALLERGIES, other)),
        }
    }
}

impl AnthropometricSource for SessionSnapshot {
    fn anthropometrics(&self) -> Result<AnthropometricInput, InputError> {
        Ok(AnthropometricInput {
            weight_kg: self.number(KEY_WEIGHT, 0.0)?,
            height_cm: self.number(KEY_HEIGHT, 0.0)?,
            age_years: self.whole_years(KEY_AGE)?,
            gender: self.text(KEY_GENDER).map(Gender::from_code).unwrap_or_default(),
            activity_factor: self.number(KEY_ACTIVITY, DEFAULT_ACTIVITY)?,
            goal: self.text(KEY_GOAL).map(Goal::from_code).unwrap_or_default(),
        })
    }
}
