use std::sync::Arc;

use tracing::{error, info, warn};

use super::catalog::seed_recipes;
use super::data::Recipe;
use super::storage::KeyValueStore;
use crate::error::{RecipeError, Result};

/// Storage slot holding the JSON array of recipes
pub const RECIPES_KEY: &str = "@RecipeApp:recipes";

/// Where a loaded collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Parsed from the stored value
    Stored,
    /// Slot was empty; seed data was written and returned
    Seeded,
    /// Stored value was unreadable or corrupt; seed data returned in memory only
    Recovered,
}

/// Result of loading the collection
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub recipes: Vec<Recipe>,
    pub origin: LoadOrigin,
}

/// The RecordStore owns the recipe collection in local storage.
/// Every save rewrites the whole collection under one key.
#[derive(Clone)]
pub struct RecordStore {
    storage: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Load the collection, seeding it on first access.
    /// Never fails: read or parse errors fall back to the seed data.
    pub async fn load(&self) -> Vec<Recipe> {
        self.load_with_origin().await.recipes
    }

    /// Like `load`, but also reports whether the data was stored, seeded or recovered
    pub async fn load_with_origin(&self) -> Loaded {
        match self.storage.get(RECIPES_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Recipe>>(&json) {
                Ok(recipes) => Loaded {
                    recipes,
                    origin: LoadOrigin::Stored,
                },
                Err(e) => {
                    // The corrupt value stays in place until the next save
                    warn!("Stored recipes are corrupt, using initial data: {}", e);
                    Loaded {
                        recipes: seed_recipes(),
                        origin: LoadOrigin::Recovered,
                    }
                }
            },
            Ok(None) => {
                info!("No recipes in storage. Loading initial data...");
                let recipes = seed_recipes();
                if let Err(e) = self.save(&recipes).await {
                    warn!("Initial data could not be persisted: {}", e);
                }
                Loaded {
                    recipes,
                    origin: LoadOrigin::Seeded,
                }
            }
            Err(e) => {
                error!("Error loading recipes: {}", e);
                Loaded {
                    recipes: seed_recipes(),
                    origin: LoadOrigin::Recovered,
                }
            }
        }
    }

    /// Serialize the full collection and overwrite the stored value
    pub async fn save(&self, recipes: &[Recipe]) -> Result<()> {
        let json = serde_json::to_string(recipes).map_err(|e| {
            error!("Error serializing recipes: {}", e);
            RecipeError::from(e)
        })?;

        self.storage.set(RECIPES_KEY, &json).await.map_err(|e| {
            error!("Error saving recipes: {}", e);
            e
        })?;

        info!("Saved {} recipes to storage", recipes.len());
        Ok(())
    }

    /// Delete the stored collection; the next load re-seeds
    pub async fn clear(&self) -> Result<()> {
        self.storage.remove(RECIPES_KEY).await.map_err(|e| {
            error!("Error clearing recipes: {}", e);
            e
        })?;

        info!("Recipes cleared from storage");
        Ok(())
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("key", &RECIPES_KEY)
            .finish()
    }
}
