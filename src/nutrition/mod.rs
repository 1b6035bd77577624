pub mod macros;
pub mod validation;

pub use macros::{
    calculate_macros, calculate_macros_from, AnthropometricInput, AnthropometricSource, Gender,
    Goal, MacroTarget,
};
pub use validation::{validate_questionnaire, ValidatedMetrics};
