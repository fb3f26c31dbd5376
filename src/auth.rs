use std::sync::Arc;

use tracing::{error, info};

use crate::error::{RecipeError, Result};
use crate::state::storage::KeyValueStore;

/// Storage slot for the session token; presence means logged in
pub const USER_TOKEN_KEY: &str = "@RecipeApp:userToken";

/// Token written on login. There is no server to issue a real one.
const SESSION_TOKEN: &str = "123";

/// Session state handed to the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated,
}

impl Session {
    pub fn is_authenticated(self) -> bool {
        self == Session::Authenticated
    }
}

/// Local login stub backed by the same key-value storage as the recipes
#[derive(Clone)]
pub struct AuthService {
    storage: Arc<dyn KeyValueStore>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Read failures count as logged out
    pub async fn check_auth_status(&self) -> Session {
        match self.storage.get(USER_TOKEN_KEY).await {
            Ok(Some(token)) if !token.is_empty() => Session::Authenticated,
            Ok(_) => Session::Anonymous,
            Err(e) => {
                error!("Error checking auth status: {}", e);
                Session::Anonymous
            }
        }
    }

    pub async fn login(&self) -> Result<Session> {
        self.storage
            .set(USER_TOKEN_KEY, SESSION_TOKEN)
            .await
            .map_err(|e| {
                error!("Error logging in: {}", e);
                RecipeError::StorageWrite("Failed to save session".into())
            })?;

        info!("User logged in");
        Ok(Session::Authenticated)
    }

    /// Never fails; a token that could not be removed is only logged
    pub async fn logout(&self) -> Session {
        match self.storage.remove(USER_TOKEN_KEY).await {
            Ok(()) => info!("User logged out successfully"),
            Err(e) => error!("Error logging out: {}", e),
        }
        Session::Anonymous
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("key", &USER_TOKEN_KEY)
            .finish()
    }
}
