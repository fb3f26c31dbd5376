//! Bundled, read-only data shipped with the application
//!
//! - Recipe type catalog (assets/data/recipeTypes.json)
//! - Seed recipes written on first launch (assets/data/recipes.json)
//! - Image name to asset lookup

use once_cell::sync::Lazy;
use tracing::error;

use super::data::{Recipe, RecipeType};

const RECIPE_TYPES_JSON: &str = include_str!("../../assets/data/recipeTypes.json");
const SEED_RECIPES_JSON: &str = include_str!("../../assets/data/recipes.json");

/// Image key that always resolves
pub const DEFAULT_IMAGE: &str = "default";

/// Image name -> bundled asset path. Must contain `DEFAULT_IMAGE`.
const IMAGE_ASSETS: &[(&str, &str)] = &[
    (DEFAULT_IMAGE, "assets/img/default.jpeg"),
    ("carbonara", "assets/img/carbonara.jpeg"),
    ("mousse", "assets/img/mousse.jpeg"),
    ("greek_salad", "assets/img/greek_salad.jpeg"),
    ("tomato_soup", "assets/img/tomato_soup.jpeg"),
];

static RECIPE_TYPES: Lazy<Vec<RecipeType>> = Lazy::new(|| {
    serde_json::from_str(RECIPE_TYPES_JSON).unwrap_or_else(|e| {
        error!("Bundled recipe types are malformed: {}", e);
        Vec::new()
    })
});

static SEED_RECIPES: Lazy<Vec<Recipe>> = Lazy::new(|| {
    serde_json::from_str(SEED_RECIPES_JSON).unwrap_or_else(|e| {
        error!("Bundled seed recipes are malformed: {}", e);
        Vec::new()
    })
});

/// Static lookup of recipe types. No mutation, no error path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCatalog;

impl TypeCatalog {
    /// All recipe types in bundled order
    pub fn list(&self) -> Vec<RecipeType> {
        RECIPE_TYPES.clone()
    }

    /// Display name for a type id
    pub fn name_of(&self, type_id: &str) -> Option<&'static str> {
        RECIPE_TYPES
            .iter()
            .find(|t| t.id == type_id)
            .map(|t| t.name.as_str())
    }
}

/// The recipes written to storage the first time the collection is loaded
pub fn seed_recipes() -> Vec<Recipe> {
    SEED_RECIPES.clone()
}

/// Resolve an image name to its bundled asset, falling back to the default image
pub fn image_asset(image_name: &str) -> &'static str {
    IMAGE_ASSETS
        .iter()
        .find(|(name, _)| *name == image_name)
        .or_else(|| IMAGE_ASSETS.iter().find(|(name, _)| *name == DEFAULT_IMAGE))
        .map(|(_, asset)| *asset)
        .unwrap_or(IMAGE_ASSETS[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_types_parse_in_order() {
        let types = TypeCatalog.list();
        assert!(!types.is_empty());
        assert_eq!(types[0].id, "t1");
        assert_eq!(TypeCatalog.name_of("t1"), Some("Pasta"));
        assert_eq!(TypeCatalog.name_of("missing"), None);
    }

    #[test]
    fn test_seed_recipes_reference_known_types() {
        let seed = seed_recipes();
        assert!(!seed.is_empty());
        for recipe in &seed {
            assert!(TypeCatalog.name_of(&recipe.type_id).is_some(), "{}", recipe.id);
        }
    }

    #[test]
    fn test_image_fallback() {
        assert_eq!(image_asset("carbonara"), "assets/img/carbonara.jpeg");
        assert_eq!(image_asset("no-such-image"), "assets/img/default.jpeg");
        assert_eq!(image_asset(DEFAULT_IMAGE), "assets/img/default.jpeg");
    }
}
