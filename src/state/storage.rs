use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tokio::task;
use tracing::{debug, info};

use crate::error::{RecipeError, Result};

/// Local persistent key-value storage (string keys to string values).
///
/// Every value is written whole; a `set` either replaces the previous
/// value or leaves it untouched.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// SQLite-backed key-value store.
///
/// The database file is created in the user's data directory unless a
/// path is configured:
/// - Linux: ~/.local/share/recipe-box/recipe_box.db
/// - macOS: ~/Library/Application Support/recipe-box/recipe_box.db
/// - Windows: %APPDATA%\recipe-box\recipe_box.db
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the store at the given path
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RecipeError::StorageWrite(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path).map_err(|e| RecipeError::StorageRead(e.to_string()))?;
        info!("Storage initialized at: {}", path.display());

        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Create an in-memory store (nothing survives the process)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| RecipeError::StorageRead(e.to_string()))?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: None,
        })
    }

    /// Create the key-value table if it doesn't exist
    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key         TEXT PRIMARY KEY,
                value       TEXT NOT NULL,
                updated_at  INTEGER NOT NULL
            )",
            [],
        )
        .map_err(|e| RecipeError::StorageWrite(e.to_string()))?;

        debug!("Storage schema initialized");
        Ok(())
    }

    /// Path to the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Run a statement on the blocking pool.
    /// rusqlite calls block, so they never run on the async worker threads.
    async fn with_conn<T, F>(&self, op: F) -> std::result::Result<T, String>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| "storage connection lock poisoned".to_string())?;
            op(&guard).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| format!("Task join error: {}", e))?
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.with_conn(move |conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        })
        .await
        .map_err(RecipeError::StorageRead)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().timestamp()],
            )
        })
        .await
        .map(|_| ())
        .map_err(RecipeError::StorageWrite)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.with_conn(move |conn| conn.execute("DELETE FROM kv WHERE key = ?1", params![key]))
            .await
            .map(|_| ())
            .map_err(RecipeError::StorageWrite)
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// In-memory store for tests and previews.
/// Writes can be made to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set`/`remove` fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RecipeError::StorageWrite("store is read-only".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| RecipeError::StorageRead("memory store lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        let mut values = self
            .values
            .lock()
            .map_err(|_| RecipeError::StorageWrite("memory store lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        let mut values = self
            .values
            .lock()
            .map_err(|_| RecipeError::StorageWrite("memory store lock poisoned".into()))?;
        values.remove(key);
        Ok(())
    }
}
