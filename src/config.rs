use std::{env, path::PathBuf};

use tracing::info;

use crate::error::{RecipeError, Result};

const DB_PATH_VAR: &str = "RECIPE_BOX_DB";
const LOG_FILTER_VAR: &str = "RECIPE_BOX_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding the key-value storage
    pub db_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_db_var(var(DB_PATH_VAR))
    }

    fn from_db_var(db_var: Option<String>) -> Result<Self> {
        let db_path = match db_var {
            Some(path) => PathBuf::from(path),
            None => {
                let path = default_db_path()?;
                info!("{DB_PATH_VAR} not set, using default: {}", path.display());
                path
            }
        };

        Ok(Self { db_path })
    }
}

/// Log filter for when RUST_LOG is not set. Read before logging is up.
pub fn log_filter() -> String {
    var(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Get the path where the database should be stored
fn default_db_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| RecipeError::Config("Could not determine user data directory".into()))?;

    path.push("recipe-box");
    path.push("recipe_box.db");
    Ok(path)
}
