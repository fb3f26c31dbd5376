//! Local-first recipe catalog.
//!
//! Recipes live in an on-device key-value store as one JSON array that is
//! seeded from bundled data on first launch. Screens read the whole
//! collection, filter it by type, and write it back whole after every
//! create, update or delete.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod filter;
pub mod mutation;
pub mod service;
pub mod state;

pub use auth::{AuthService, Session};
pub use error::{RecipeError, Result};
pub use filter::{by_type, TypeFilter, ALL_TYPES};
pub use service::RecipeCatalog;
pub use state::data::{Recipe, RecipeDraft, RecipeType};
pub use state::library::{LoadOrigin, Loaded, RecordStore};
pub use state::storage::{KeyValueStore, MemoryStore, SqliteStore};
