use crate::config::PlanConfig;
use crate::error::PlanningError;
use crate::plan::{MealPlan, MealtimeSelection};
use pickmeal_recipe::{MealCatalog, Recipe};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hard ceiling on how many recipes one mealtime may receive in a single
/// weekly plan.
pub const RECIPES_PER_MEAL_PER_WEEK: i32 = 7;

/// Generate a weekly plan: for each configured mealtime, draw recipes
/// uniformly at random from that mealtime's catalog list.
///
/// # Arguments
/// * `catalog` - Loaded recipe catalog, read-only during planning
/// * `config` - Mealtimes to plan and how many recipes each should get
/// * `seed` - Optional seed for reproducible plans; `None` derives one from
///   the current time
pub fn generate_plan(
    catalog: &MealCatalog,
    config: &PlanConfig,
    seed: Option<u64>,
) -> Result<MealPlan, PlanningError> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            use std::time::SystemTime;
            let now = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap()
                .as_secs();
            StdRng::seed_from_u64(now)
        }
    };

    let mut selections = Vec::with_capacity(config.mealtimes.len());
    for mealtime in &config.mealtimes {
        let recipes =
            select_mealtime_recipes(catalog, &mealtime.name, mealtime.recipes, &mut rng)?;
        selections.push(MealtimeSelection {
            mealtime: mealtime.name.clone(),
            recipes,
        });
    }

    Ok(MealPlan::new(selections))
}

/// Draw `count` times over the full recipe list, keeping a draw only when it
/// is not already in the selection. Draws are counted, not acceptances, so a
/// duplicate draw shortens the result instead of being retried.
fn select_mealtime_recipes(
    catalog: &MealCatalog,
    mealtime: &str,
    count: i32,
    rng: &mut StdRng,
) -> Result<Vec<Recipe>, PlanningError> {
    if count <= 0 {
        return Err(PlanningError::NonPositiveCount {
            mealtime: mealtime.to_string(),
            count,
        });
    }
    if count > RECIPES_PER_MEAL_PER_WEEK {
        return Err(PlanningError::CountExceedsCeiling {
            mealtime: mealtime.to_string(),
            count,
        });
    }

    let recipes = catalog
        .recipes(mealtime)
        .ok_or_else(|| PlanningError::UnknownMealtime {
            mealtime: mealtime.to_string(),
        })?;

    let mut count = count as usize;
    if recipes.len() < count {
        tracing::warn!(
            mealtime,
            requested = count,
            available = recipes.len(),
            "catalog has fewer recipes than requested, clamping"
        );
        count = recipes.len();
    }

    let mut chosen: Vec<Recipe> = Vec::with_capacity(count);
    for _ in 0..count {
        let drawn = &recipes[rng.random_range(0..recipes.len())];
        if !chosen.contains(drawn) {
            chosen.push(drawn.clone());
        }
    }

    Ok(chosen)
}
