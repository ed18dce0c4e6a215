use crate::error::CatalogError;
use crate::model::Recipe;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// On-disk shape of the catalog document: a single top-level `Meals`
/// mapping from mealtime name to recipe list.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "Meals")]
    meals: HashMap<String, Vec<Recipe>>,
}

/// The static collection of recipes, grouped by mealtime. Loaded once and
/// read-only during planning.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    meals: HashMap<String, Vec<Recipe>>,
}

impl MealCatalog {
    /// Load a catalog from a JSON document of the shape
    /// `{ "Meals": { "<mealtime>": [ { "Name": ..., "Servings": ... }, ... ] } }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let document: CatalogDocument = serde_json::from_str(&raw)?;

        Ok(MealCatalog {
            meals: document.meals,
        })
    }

    /// The recipes available for one mealtime, in document order. `None`
    /// when the catalog has no entry for that mealtime at all.
    pub fn recipes(&self, mealtime: &str) -> Option<&[Recipe]> {
        self.meals.get(mealtime).map(Vec::as_slice)
    }
}

impl From<HashMap<String, Vec<Recipe>>> for MealCatalog {
    fn from(meals: HashMap<String, Vec<Recipe>>) -> Self {
        MealCatalog { meals }
    }
}
