use pickmeal_recipe::Recipe;
use std::fmt;

/// One generated weekly plan: each configured mealtime with the recipes
/// chosen for it, in configuration order. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlan {
    selections: Vec<MealtimeSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealtimeSelection {
    pub mealtime: String,
    pub recipes: Vec<Recipe>,
}

impl MealPlan {
    pub(crate) fn new(selections: Vec<MealtimeSelection>) -> Self {
        MealPlan { selections }
    }

    pub fn selections(&self) -> &[MealtimeSelection] {
        &self.selections
    }

    /// The recipes chosen for one mealtime, or `None` when the plan was not
    /// configured with that mealtime.
    pub fn recipes(&self, mealtime: &str) -> Option<&[Recipe]> {
        self.selections
            .iter()
            .find(|selection| selection.mealtime == mealtime)
            .map(|selection| selection.recipes.as_slice())
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, selection) in self.selections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", selection.mealtime)?;
            for recipe in &selection.recipes {
                // A recipe without a servings count still gets a line, just
                // without the trailing "xN".
                match recipe.servings {
                    Some(servings) => writeln!(f, "  - {} x{}", recipe.name, servings)?,
                    None => writeln!(f, "  - {}", recipe.name)?,
                }
            }
        }
        Ok(())
    }
}
