use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A recipe and how many servings it makes.
///
/// Field names mirror the catalog document (`Name`, `Servings`, `Url`,
/// `Tags`); everything but the name is optional there. Equality is value
/// equality over all fields, which is what the planner's duplicate check
/// relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Servings", default)]
    pub servings: Option<u32>,

    #[serde(rename = "Url", default)]
    pub url: Option<String>,

    /// Free-form labels like "vegetarian" or "slow-cooker". Every recipe
    /// owns its own set; empty when the document carries none.
    #[serde(rename = "Tags", default)]
    pub tags: BTreeSet<String>,
}
