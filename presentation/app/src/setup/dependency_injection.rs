use std::sync::Arc;

use logger::TracingLogger;
use persistence::bundle::DirectoryBundle;
use persistence::store::json_file::JsonFileStore;
use persistence::store::memory::InMemoryStore;

use business::application::favorite::registry::FavoritesRegistryImpl;
use business::application::recipe::catalog::RecipeCatalogImpl;
use business::application::search::search_recipes::SearchRecipesUseCaseImpl;
use business::domain::favorite::repository::KeyValueStore;
use business::domain::favorite::use_cases::registry::FavoritesRegistry;
use business::domain::logger::Logger;
use business::domain::recipe::repository::ImageLookup;
use business::domain::recipe::use_cases::catalog::RecipeCatalog;
use business::domain::search::use_cases::search_recipes::SearchRecipesUseCase;

use crate::config::app_config::AppConfig;
use crate::config::favorites_config::StoreBackend;

pub struct DependencyContainer {
    pub catalog: Arc<dyn RecipeCatalog>,
    pub favorites: Arc<dyn FavoritesRegistry>,
    pub search: Arc<dyn SearchRecipesUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let bundle = Arc::new(DirectoryBundle::new(&config.catalog.recipes_dir));
        let store: Arc<dyn KeyValueStore> = match &config.favorites.backend {
            StoreBackend::File(path) => Arc::new(JsonFileStore::new(path)),
            StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        };

        // Use cases
        let mut catalog_impl = RecipeCatalogImpl::new(
            bundle.clone(),
            logger.clone(),
            config.catalog.resource_name.clone(),
        );
        if let Some(images) = image_lookup(&bundle) {
            catalog_impl = catalog_impl.with_image_lookup(images);
        }
        let catalog: Arc<dyn RecipeCatalog> = Arc::new(catalog_impl);
        let favorites: Arc<dyn FavoritesRegistry> = Arc::new(FavoritesRegistryImpl::new(
            config.favorites.key.clone(),
            store,
            logger.clone(),
        ));
        let search: Arc<dyn SearchRecipesUseCase> = Arc::new(SearchRecipesUseCaseImpl {
            catalog: catalog.clone(),
            logger,
        });

        Self {
            catalog,
            favorites,
            search,
        }
    }
}

/// Image checks only run for bundles that ship an `images/` directory.
fn image_lookup(bundle: &Arc<DirectoryBundle>) -> Option<Arc<dyn ImageLookup>> {
    if bundle.images_dir().is_dir() {
        Some(bundle.clone())
    } else {
        tracing::debug!(
            dir = %bundle.images_dir().display(),
            "No images directory, skipping image checks"
        );
        None
    }
}
