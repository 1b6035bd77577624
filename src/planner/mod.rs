pub mod entry;
pub mod pool;
pub mod replace;
pub mod seed;
pub mod slots;
pub mod weekly;

pub use entry::{build_meal_entry, MealEntry};
pub use pool::RecipePool;
pub use replace::replace_meal;
pub use seed::{PlanSeed, SeedIdentity};
pub use slots::{slot_for, MealSlot, DAY_LABELS, MEAL_SLOTS};
pub use weekly::{allergen_tokens, eligible_recipes, generate_weekly_plan, DayEntry, WeeklyPlan};
