use crate::planner::RECIPES_PER_MEAL_PER_WEEK;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error("recipes per mealtime must be greater than 0, got {count} for {mealtime}")]
    NonPositiveCount { mealtime: String, count: i32 },

    #[error(
        "cannot choose more than {ceiling} recipes per mealtime per week, got {count} for {mealtime}",
        ceiling = RECIPES_PER_MEAL_PER_WEEK
    )]
    CountExceedsCeiling { mealtime: String, count: i32 },

    #[error("mealtime {mealtime:?} is not in the recipe catalog")]
    UnknownMealtime { mealtime: String },
}
