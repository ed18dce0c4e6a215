pub mod config;
pub mod error;
pub mod plan;
pub mod planner;

pub use config::{MealtimeConfig, PlanConfig};
pub use error::PlanningError;
pub use plan::{MealPlan, MealtimeSelection};
pub use planner::{RECIPES_PER_MEAL_PER_WEEK, generate_plan};
