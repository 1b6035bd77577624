use crate::catalog::MealType;

/// A meal slot within a day and its fixed share of the daily calories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealSlot {
    pub meal_type: MealType,
    pub ratio: f64,
    pub label: &'static str,
}

/// Slots in serving order. Ratios sum to 1.0.
pub static MEAL_SLOTS: [MealSlot; 4] = [
    MealSlot { meal_type: MealType::Breakfast, ratio: 0.25, label: "Breakfast" },
    MealSlot { meal_type: MealType::Snack, ratio: 0.15, label: "Snack" },
    MealSlot { meal_type: MealType::Lunch, ratio: 0.35, label: "Lunch" },
    MealSlot { meal_type: MealType::Dinner, ratio: 0.25, label: "Dinner" },
];

pub const DAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn slot_for(meal_type: MealType) -> &'static MealSlot {
    match meal_type {
        MealType::Breakfast => &MEAL_SLOTS[0],
        MealType::Snack => &MEAL_SLOTS[1],
        MealType::Lunch => &MEAL_SLOTS[2],
        MealType::Dinner => &MEAL_SLOTS[3],
    }
}
