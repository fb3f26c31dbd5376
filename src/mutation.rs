//! Create, update and delete recipes
//!
//! Each mutation validates the draft, reloads the stored collection,
//! applies the change to it and writes the whole collection back.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{RecipeError, Result};
use crate::service::RecipeCatalog;
use crate::state::catalog::DEFAULT_IMAGE;
use crate::state::data::{Recipe, RecipeDraft};
use crate::state::library::{LoadOrigin, RECIPES_KEY};

const RECIPE_ID_PREFIX: &str = "Recipe_";

/// Fresh recipe id, unique across the collection
pub fn new_recipe_id() -> String {
    format!("{}{}", RECIPE_ID_PREFIX, Uuid::new_v4().simple())
}

/// Split multi-line form text into trimmed, non-empty entries
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// A draft whose required fields are all present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub type_id: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl ValidDraft {
    fn into_recipe(self, id: String, image_name: String) -> Recipe {
        Recipe {
            id,
            type_id: self.type_id,
            name: self.name,
            ingredients: self.ingredients,
            steps: self.steps,
            image_name,
        }
    }

    /// Overwrite the editable fields, keeping id and image
    fn apply_to(self, recipe: &mut Recipe) {
        recipe.name = self.name;
        recipe.type_id = self.type_id;
        recipe.ingredients = self.ingredients;
        recipe.steps = self.steps;
    }
}

/// Check that name, type, ingredients and steps are all non-blank
pub fn validate(draft: &RecipeDraft) -> Result<ValidDraft> {
    let required = [
        ("name", &draft.name),
        ("typeId", &draft.type_id),
        ("ingredients", &draft.ingredients),
        ("steps", &draft.steps),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(RecipeError::Validation { field: *field });
    }

    Ok(ValidDraft {
        name: draft.name.trim().to_string(),
        type_id: draft.type_id.trim().to_string(),
        ingredients: split_lines(&draft.ingredients),
        steps: split_lines(&draft.steps),
    })
}

impl RecipeCatalog {
    /// Latest stored collection for a mutation.
    /// Recovered data is refused so a write never replaces recipes that could not be read.
    async fn load_for_write(&self) -> Result<Vec<Recipe>> {
        let loaded = self.fetch_all_with_origin().await;
        match loaded.origin {
            LoadOrigin::Stored | LoadOrigin::Seeded => Ok(loaded.recipes),
            LoadOrigin::Recovered => {
                warn!("Stored recipes could not be read, mutation aborted");
                Err(RecipeError::StorageRead(format!(
                    "{} could not be read, refusing to overwrite it",
                    RECIPES_KEY
                )))
            }
        }
    }

    /// Validate the draft and append it as a new recipe
    pub async fn create(&self, draft: &RecipeDraft) -> Result<Recipe> {
        let valid = validate(draft)?;

        let _writer = self.write_lock.lock().await;
        let mut recipes = self.load_for_write().await?;
        let recipe = valid.into_recipe(new_recipe_id(), DEFAULT_IMAGE.to_string());
        recipes.push(recipe.clone());
        self.persist_all(&recipes).await?;

        info!(id = %recipe.id, "Recipe added");
        Ok(recipe)
    }

    /// Replace name, type, ingredients and steps of an existing recipe
    pub async fn update(&self, id: &str, draft: &RecipeDraft) -> Result<Recipe> {
        let valid = validate(draft)?;

        let _writer = self.write_lock.lock().await;
        let mut recipes = self.load_for_write().await?;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RecipeError::NotFound { id: id.to_string() })?;
        valid.apply_to(recipe);
        let updated = recipe.clone();
        self.persist_all(&recipes).await?;

        info!(id = %updated.id, "Recipe updated");
        Ok(updated)
    }

    /// Remove a recipe and return the remaining collection.
    /// An unknown id leaves storage untouched.
    pub async fn delete(&self, id: &str) -> Result<Vec<Recipe>> {
        let _writer = self.write_lock.lock().await;
        let mut recipes = self.load_for_write().await?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);

        if recipes.len() == before {
            debug!(id, "Delete skipped, recipe not found");
            return Ok(recipes);
        }

        self.persist_all(&recipes).await?;
        info!(id, "Recipe deleted");
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::state::catalog::seed_recipes;
    use crate::state::storage::{KeyValueStore, MemoryStore};

    /// Writes succeed but every read fails, like a locked database
    #[derive(Default)]
    struct UnreadableStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl KeyValueStore for UnreadableStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(RecipeError::StorageRead("database is locked".into()))
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key).await
        }
    }

    fn carbonara() -> Recipe {
        Recipe {
            id: "r1".into(),
            type_id: "t1".into(),
            name: "Carbonara".into(),
            ingredients: vec!["Pasta".into(), "Eggs".into()],
            steps: vec!["Boil".into(), "Mix".into()],
            image_name: "default".into(),
        }
    }

    fn tiramisu() -> Recipe {
        Recipe {
            id: "r2".into(),
            type_id: "t2".into(),
            name: "Tiramisu".into(),
            ingredients: vec!["Mascarpone".into(), "Coffee".into()],
            steps: vec!["Layer".into(), "Chill".into()],
            image_name: "tiramisu".into(),
        }
    }

    async fn catalog_with(recipes: &[Recipe]) -> (Arc<MemoryStore>, RecipeCatalog) {
        let memory = Arc::new(MemoryStore::new());
        let catalog = RecipeCatalog::new(memory.clone());
        catalog.persist_all(recipes).await.unwrap();
        (memory, catalog)
    }

    fn draft() -> RecipeDraft {
        RecipeDraft::new("  Cacio e Pepe ", "t1", "Pasta\n \nEggs", "Boil\nToss\n")
    }

    #[test]
    fn test_split_lines_trims_and_drops_blanks() {
        assert_eq!(split_lines("Pasta\n \nEggs"), vec!["Pasta", "Eggs"]);
        assert_eq!(split_lines("  a  \r\n\n b"), vec!["a", "b"]);
        assert!(split_lines("\n\n").is_empty());
    }

    #[test]
    fn test_validate_names_missing_field() {
        let cases = [
            (RecipeDraft::new(" ", "t1", "a", "b"), "name"),
            (RecipeDraft::new("n", "", "a", "b"), "typeId"),
            (RecipeDraft::new("n", "t1", "\n  \n", "b"), "ingredients"),
            (RecipeDraft::new("n", "t1", "a", ""), "steps"),
        ];
        for (draft, expected) in cases {
            match validate(&draft) {
                Err(RecipeError::Validation { field }) => assert_eq!(field, expected),
                other => panic!("expected validation error for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_new_ids_are_distinct() {
        let a = new_recipe_id();
        let b = new_recipe_id();
        assert!(a.starts_with("Recipe_"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_create_appends_and_persists() {
        let (_, catalog) = catalog_with(&[carbonara()]).await;

        let created = catalog.create(&draft()).await.unwrap();
        assert_eq!(created.name, "Cacio e Pepe");
        assert_eq!(created.ingredients, vec!["Pasta", "Eggs"]);
        assert_eq!(created.steps, vec!["Boil", "Toss"]);
        assert_eq!(created.image_name, DEFAULT_IMAGE);

        let stored = catalog.fetch_all().await;
        assert_eq!(stored, vec![carbonara(), created]);
    }

    #[tokio::test]
    async fn test_create_rejection_leaves_storage_alone() {
        let (_, catalog) = catalog_with(&[carbonara()]).await;

        let result = catalog
            .create(&RecipeDraft::new("", "t1", "Pasta", "Boil"))
            .await;
        assert!(matches!(result, Err(RecipeError::Validation { field: "name" })));
        assert_eq!(catalog.fetch_all().await, vec![carbonara()]);
    }

    #[tokio::test]
    async fn test_create_surfaces_write_failure() {
        let (memory, catalog) = catalog_with(&[carbonara()]).await;
        memory.set_fail_writes(true);

        let result = catalog.create(&draft()).await;
        assert!(matches!(result, Err(RecipeError::StorageWrite(_))));
        assert_eq!(catalog.fetch_all().await, vec![carbonara()]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (_, catalog) = catalog_with(&[carbonara()]).await;

        let result = catalog.update("missing", &draft()).await;
        assert!(matches!(result, Err(RecipeError::NotFound { ref id }) if id == "missing"));
        assert_eq!(catalog.fetch_all().await, vec![carbonara()]);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_image() {
        let (_, catalog) = catalog_with(&[carbonara(), tiramisu()]).await;

        let updated = catalog
            .update("r2", &RecipeDraft::new("Affogato", "t3", "Gelato\nEspresso", "Pour"))
            .await
            .unwrap();
        assert_eq!(updated.id, "r2");
        assert_eq!(updated.image_name, "tiramisu");
        assert_eq!(updated.name, "Affogato");
        assert_eq!(updated.type_id, "t3");
        assert_eq!(updated.ingredients, vec!["Gelato", "Espresso"]);
        assert_eq!(updated.steps, vec!["Pour"]);

        let stored = catalog.fetch_all().await;
        assert_eq!(stored, vec![carbonara(), updated]);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let (_, catalog) = catalog_with(&[carbonara()]).await;

        let result = catalog.update("missing", &RecipeDraft::default()).await;
        assert!(matches!(result, Err(RecipeError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let (_, catalog) = catalog_with(&[carbonara(), tiramisu()]).await;

        let remaining = catalog.delete("missing").await.unwrap();
        assert_eq!(remaining, vec![carbonara(), tiramisu()]);
        assert_eq!(catalog.fetch_all().await, remaining);
    }

    #[tokio::test]
    async fn test_delete_last_recipe_leaves_empty_collection() {
        let (_, catalog) = catalog_with(&[carbonara()]).await;

        assert!(catalog.delete("r1").await.unwrap().is_empty());
        assert!(catalog.fetch_all().await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_are_not_lost() {
        let (_, catalog) = catalog_with(&[]).await;

        let mut handles = Vec::new();
        for i in 0..8 {
            let catalog = catalog.clone();
            handles.push(tokio::spawn(async move {
                catalog
                    .create(&RecipeDraft::new(format!("Recipe {}", i), "t1", "Salt", "Cook"))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(catalog.fetch_all().await.len(), 8);
    }

    #[tokio::test]
    async fn test_read_failure_aborts_mutations() {
        let store = Arc::new(UnreadableStore::default());
        let catalog = RecipeCatalog::new(store.clone());
        catalog.persist_all(&[carbonara()]).await.unwrap();

        assert!(matches!(
            catalog.create(&draft()).await,
            Err(RecipeError::StorageRead(_))
        ));
        assert!(matches!(
            catalog.update("r1", &draft()).await,
            Err(RecipeError::StorageRead(_))
        ));
        assert!(matches!(
            catalog.delete("r1").await,
            Err(RecipeError::StorageRead(_))
        ));

        let raw = store.inner.get(RECIPES_KEY).await.unwrap().unwrap();
        let stored: Vec<Recipe> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec![carbonara()]);
    }

    #[tokio::test]
    async fn test_corrupt_collection_is_not_overwritten() {
        let memory = Arc::new(MemoryStore::new());
        memory.set(RECIPES_KEY, "{broken").await.unwrap();
        let catalog = RecipeCatalog::new(memory.clone());

        assert!(catalog.create(&draft()).await.is_err());
        assert!(catalog.update("r1", &draft()).await.is_err());
        assert!(catalog.delete("r1").await.is_err());

        assert_eq!(
            memory.get(RECIPES_KEY).await.unwrap().as_deref(),
            Some("{broken")
        );
    }

    #[tokio::test]
    async fn test_create_on_first_launch_keeps_seed() {
        let catalog = RecipeCatalog::new(Arc::new(MemoryStore::new()));

        let created = catalog.create(&draft()).await.unwrap();
        let stored = catalog.fetch_all().await;
        assert_eq!(stored.len(), seed_recipes().len() + 1);
        assert_eq!(stored.last(), Some(&created));
    }
}
