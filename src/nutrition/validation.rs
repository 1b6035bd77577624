use std::ops::RangeInclusive;

use crate::error::InputError;
use super::macros::Gender;

pub const AGE_RANGE: RangeInclusive<u32> = 12..=110;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=300.0;
pub const HEIGHT_RANGE: RangeInclusive<f64> = 120.0..=250.0;

/// Body metrics that passed questionnaire validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedMetrics {
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, InputError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(InputError::MissingField(field)),
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, InputError> {
    value.parse::<T>().map_err(|_| InputError::InvalidInput {
        field,
        value: value.to_string(),
    })
}

/// Validates the raw body-metrics step of the questionnaire.
///
/// All four fields are required. Non-numeric values fail fast with
/// `InvalidInput`; range violations are collected and reported together.
pub fn validate_questionnaire(
    age: Option<&str>,
    weight: Option<&str>,
    height: Option<&str>,
    gender: Option<&str>,
) -> Result<ValidatedMetrics, InputError> {
    let age = required("age", age)?;
    let weight = required("weight", weight)?;
    let height = required("height", height)?;
    let gender = required("gender", gender)?;

    let age_years: u32 = parse_number("age", age)?;
    let weight_kg: f64 = parse_number("weight", weight)?;
    let height_cm: f64 = parse_number("height", height)?;

    let mut errors = Vec::new();
    if !AGE_RANGE.contains(&age_years) {
        errors.push(format!("age must be between {} and {}", AGE_RANGE.start(), AGE_RANGE.end()));
    }
    if !WEIGHT_RANGE.contains(&weight_kg) {
        errors.push(format!("weight must be between {} and {}", WEIGHT_RANGE.start(), WEIGHT_RANGE.end()));
    }
    if !HEIGHT_RANGE.contains(&height_cm) {
        errors.push(format!("height must be between {} and {}", HEIGHT_RANGE.start(), HEIGHT_RANGE.end()));
    }
    if !errors.is_empty() {
        return Err(InputError::Validation(errors));
    }

    Ok(ValidatedMetrics {
        age_years,
        weight_kg,
        height_cm,
        gender: Gender::from_code(gender),
    })
}
