use tracing::{debug, info, warn};

use crate::auth::{AuthService, Session};
use crate::filter::TypeFilter;
use crate::service::RecipeCatalog;
use crate::state::data::{Recipe, RecipeType};
use crate::state::library::{LoadOrigin, Loaded};

/// Token identifying one asynchronous load.
/// A completion is applied only while its token is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup session check finished
    SessionChecked(Session),
    /// Login attempt finished
    LoggedIn(Result<Session, String>),
    /// Logout finished (always succeeds)
    LoggedOut,
    /// Background recipe load completed
    RecipesLoaded(Generation, Loaded),
    /// User picked a type in the list filter
    FilterSelected(TypeFilter),
}

/// Main application state, without any rendering
#[derive(Debug, Clone)]
pub struct App {
    /// Explicit session state; `None` until the startup check completes
    pub session: Option<Session>,
    /// Snapshot of the collection from the last applied load
    pub recipes: Vec<Recipe>,
    pub types: Vec<RecipeType>,
    pub filter: TypeFilter,
    pub is_loading: bool,
    /// Status message to display to the user
    pub status: String,
    generation: u64,
}

impl App {
    pub fn new(types: Vec<RecipeType>) -> Self {
        Self {
            session: None,
            recipes: Vec::new(),
            types,
            filter: TypeFilter::All,
            is_loading: false,
            status: String::new(),
            generation: 0,
        }
    }

    /// Start a load and get the token its completion must carry
    pub fn begin_load(&mut self) -> Generation {
        self.generation += 1;
        self.is_loading = true;
        Generation(self.generation)
    }

    /// The view went away: any pending completion becomes stale
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.is_loading = false;
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.generation
    }

    /// Recipes shown under the selected filter
    pub fn visible(&self) -> Vec<Recipe> {
        self.filter.apply(&self.recipes)
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SessionChecked(session) => {
                self.session = Some(session);
            }
            Message::LoggedIn(Ok(session)) => {
                self.session = Some(session);
                self.status.clear();
            }
            Message::LoggedIn(Err(reason)) => {
                warn!("Login failed: {}", reason);
                self.session = Some(Session::Anonymous);
                self.status = "Login failed. Please try again.".to_string();
            }
            Message::LoggedOut => {
                self.session = Some(Session::Anonymous);
                self.recipes.clear();
                self.filter = TypeFilter::All;
                // Drop anything still loading for the previous user
                self.teardown();
            }
            Message::RecipesLoaded(generation, loaded) => {
                if !self.is_current(generation) {
                    debug!(?generation, "Discarding stale recipe load");
                    return;
                }

                self.is_loading = false;
                self.status = match loaded.origin {
                    LoadOrigin::Recovered => {
                        "Saved recipes could not be read. Showing the default recipes.".to_string()
                    }
                    LoadOrigin::Stored | LoadOrigin::Seeded => String::new(),
                };
                self.recipes = loaded.recipes;
                info!("Showing {} recipes", self.recipes.len());
            }
            Message::FilterSelected(filter) => {
                self.filter = filter;
            }
        }
    }
}

/// Check the stored session at startup
pub async fn check_session(auth: AuthService) -> Message {
    Message::SessionChecked(auth.check_auth_status().await)
}

pub async fn login(auth: AuthService) -> Message {
    Message::LoggedIn(auth.login().await.map_err(|e| e.to_string()))
}

pub async fn logout(auth: AuthService) -> Message {
    auth.logout().await;
    Message::LoggedOut
}

/// Load the collection for the given generation
pub async fn load_recipes(catalog: RecipeCatalog, generation: Generation) -> Message {
    Message::RecipesLoaded(generation, catalog.fetch_all_with_origin().await)
}
