use thiserror::Error;

/// Errors surfaced by the recipe store, catalog and mutation layer
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A required draft field was empty after trimming
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    /// The mutation target does not exist in the stored collection
    #[error("Recipe not found: {id}")]
    NotFound { id: String },

    #[error("Storage read failed: {0}")]
    StorageRead(String),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
