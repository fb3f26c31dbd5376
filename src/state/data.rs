/// Shared data structures for the recipe catalog
///
/// These structs represent the data model that flows between
/// the storage layer and the screens. Field names are stored in
/// camelCase to match the persisted JSON.

use serde::{Deserialize, Serialize};

/// A recipe category from the bundled type catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeType {
    /// Stable identifier (e.g., "t1")
    pub id: String,
    /// Display label (e.g., "Pasta")
    pub name: String,
}

/// Represents a single recipe in the collection
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe ID (e.g., "Recipe_3f2b...")
    pub id: String,
    /// Foreign key into the type catalog, not checked on write
    pub type_id: String,
    /// Display name, trimmed
    pub name: String,
    /// Ingredient lines, trimmed with blanks removed
    pub ingredients: Vec<String>,
    /// Instruction lines in order
    pub steps: Vec<String>,
    /// Key into the bundled image table
    pub image_name: String,
}

/// Unvalidated form input for creating or editing a recipe
///
/// Ingredients and steps are raw multi-line text, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub type_id: String,
    pub ingredients: String,
    pub steps: String,
}

impl RecipeDraft {
    pub fn new(
        name: impl Into<String>,
        type_id: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_id: type_id.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
        }
    }
}

impl From<&Recipe> for RecipeDraft {
    /// Pre-fill an edit form from an existing recipe
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            type_id: recipe.type_id.clone(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.join("\n"),
        }
    }
}
