use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use recipe_box::app::{self, App, Message};
use recipe_box::config::{self, Config};
use recipe_box::state::catalog::image_asset;
use recipe_box::{
    AuthService, KeyValueStore, RecipeCatalog, RecipeError, Session, SqliteStore, TypeFilter,
    ALL_TYPES,
};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::log_filter()));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Open storage, make sure there is a session, and print the recipe list
/// for the type given as the first argument (default "all").
async fn run() -> recipe_box::Result<()> {
    let selected = std::env::args().nth(1).unwrap_or_else(|| ALL_TYPES.to_string());

    let config = Config::load()?;
    let storage: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(&config.db_path)?);
    let auth = AuthService::new(storage.clone());
    let catalog = RecipeCatalog::new(storage);

    let mut view = App::new(catalog.fetch_types());

    view.update(app::check_session(auth.clone()).await);
    if !view.session.is_some_and(Session::is_authenticated) {
        info!("No session found, logging in");
        view.update(app::login(auth.clone()).await);
    }
    if !view.session.is_some_and(Session::is_authenticated) {
        return Err(RecipeError::StorageWrite(view.status.clone()));
    }

    view.update(Message::FilterSelected(TypeFilter::parse(&selected)));
    let generation = view.begin_load();
    view.update(app::load_recipes(catalog.clone(), generation).await);

    if !view.status.is_empty() {
        println!("{}", view.status);
    }

    let visible = view.visible();
    if visible.is_empty() {
        println!("No Recipes found for this type");
    }
    for recipe in visible {
        let type_name = catalog.types().name_of(&recipe.type_id).unwrap_or("Unknown");
        println!(
            "{}  [{}] {}  ({} ingredients, {} steps, {})",
            recipe.id,
            type_name,
            recipe.name,
            recipe.ingredients.len(),
            recipe.steps.len(),
            image_asset(&recipe.image_name)
        );
    }

    Ok(())
}
