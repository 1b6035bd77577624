use serde::Serialize;

use crate::catalog::RecipeId;
use crate::nutrition::MacroTarget;
use crate::planner::{DayEntry, WeeklyPlan};

pub const EMPTY_PLAN_MESSAGE: &str =
    "No recipes match your diet and allergies. Try relaxing your preferences.";

/// Plan document shown to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub days: Vec<DayEntry>,
    pub macros: MacroTarget,
    pub is_guest: bool,
    pub can_refresh: bool,
    pub days_left: i64,
    pub is_subscribed: bool,
    pub favorite_recipe_ids: Vec<RecipeId>,
}

impl PlanResponse {
    pub fn guest(plan: WeeklyPlan, macros: MacroTarget) -> Self {
        Self {
            days: plan.days,
            macros,
            is_guest: true,
            can_refresh: false,
            days_left: 0,
            is_subscribed: false,
            favorite_recipe_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlanPage {
    Plan(PlanResponse),
    #[serde(rename_all = "camelCase")]
    Empty { error_message: String },
}

impl PlanPage {
    pub fn empty() -> Self {
        PlanPage::Empty {
            error_message: EMPTY_PLAN_MESSAGE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PlanPage::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_json() {
        let json = serde_json::to_value(PlanPage::empty()).unwrap();
        assert_eq!(json["errorMessage"], EMPTY_PLAN_MESSAGE);
    }

    #[test]
    fn test_guest_response_flags() {
        let page = PlanPage::Plan(PlanResponse::guest(
            WeeklyPlan { days: Vec::new() },
            MacroTarget::default(),
        ));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["isGuest"], true);
        assert_eq!(json["canRefresh"], false);
        assert_eq!(json["daysLeft"], 0);
        assert_eq!(json["favoriteRecipeIds"], serde_json::json!([]));
    }
}
