use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{RecipeError, Result};
use crate::state::catalog::TypeCatalog;
use crate::state::data::{Recipe, RecipeType};
use crate::state::library::{Loaded, RecordStore};
use crate::state::storage::KeyValueStore;

/// Service facade between the screens and storage.
///
/// Reads delegate straight to the record store and type catalog.
/// Mutations (see `mutation.rs`) hold `write_lock` across their
/// load-modify-save so two of them never interleave.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    records: RecordStore,
    types: TypeCatalog,
    pub(crate) write_lock: Arc<Mutex<()>>,
}

impl RecipeCatalog {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            records: RecordStore::new(storage),
            types: TypeCatalog,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn fetch_all(&self) -> Vec<Recipe> {
        self.records.load().await
    }

    /// `fetch_all` with the load origin, for screens that report recovery
    pub async fn fetch_all_with_origin(&self) -> Loaded {
        self.records.load_with_origin().await
    }

    pub fn fetch_types(&self) -> Vec<RecipeType> {
        self.types.list()
    }

    pub async fn persist_all(&self, recipes: &[Recipe]) -> Result<()> {
        self.records.save(recipes).await
    }

    /// Look up one recipe for the details and edit screens
    pub async fn fetch_one(&self, id: &str) -> Result<Recipe> {
        self.fetch_all()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RecipeError::NotFound { id: id.to_string() })
    }

    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }
}
