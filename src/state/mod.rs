/// State management module
///
/// This module handles all persisted recipe state, including:
/// - Key-value storage backends (storage.rs)
/// - Shared data structures (data.rs)
/// - Loading, seeding and saving the recipe collection (library.rs)
/// - Bundled type catalog and image table (catalog.rs)

pub mod catalog;
pub mod data;
pub mod library;
pub mod storage;
