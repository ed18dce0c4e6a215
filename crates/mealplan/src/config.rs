use serde::{Deserialize, Serialize};

/// How many recipes to draw for one named mealtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealtimeConfig {
    pub name: String,
    /// Carried as a signed count so out-of-range configuration values reach
    /// the planner's own validation instead of failing deserialization.
    pub recipes: i32,
}

/// The mealtimes to plan, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_mealtimes")]
    pub mealtimes: Vec<MealtimeConfig>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            mealtimes: default_mealtimes(),
        }
    }
}

fn default_mealtimes() -> Vec<MealtimeConfig> {
    [("Breakfast", 3), ("Lunch", 2), ("Dinner", 2), ("Snacks", 2)]
        .into_iter()
        .map(|(name, recipes)| MealtimeConfig {
            name: name.to_string(),
            recipes,
        })
        .collect()
}
