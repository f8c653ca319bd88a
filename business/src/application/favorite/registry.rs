use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::favorite::model::FavoriteSet;
use crate::domain::favorite::repository::KeyValueStore;
use crate::domain::favorite::use_cases::registry::FavoritesRegistry;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::RecipeId;

pub const DEFAULT_FAVORITES_KEY: &str = "favorite_recipe_ids";

pub struct FavoritesRegistryImpl {
    store: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
    key: String,
    favorites: Mutex<FavoriteSet>,
}

impl FavoritesRegistryImpl {
    /// Creates the registry and loads the persisted set stored under `key`.
    /// A missing key or an unreadable store both start from an empty set.
    pub fn new(
        key: impl Into<String>,
        store: Arc<dyn KeyValueStore>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let key = key.into();
        let favorites = match store.get(&key) {
            Ok(Some(ids)) => FavoriteSet::from_ids(ids),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                logger.error(&format!("Could not read favorites under '{}': {}", key, e));
                FavoriteSet::new()
            }
        };
        logger.info(&format!(
            "Loaded {} favorites from '{}'",
            favorites.len(),
            key
        ));

        Self {
            store,
            logger,
            key,
            favorites: Mutex::new(favorites),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FavoritesRegistry for FavoritesRegistryImpl {
    fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    fn toggle(&self, id: RecipeId) -> bool {
        // Held across the write so concurrent toggles persist in order.
        let mut favorites = self
            .favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let is_favorite = favorites.toggle(id);

        if let Err(e) = self.store.set(&self.key, &favorites.to_sorted_ids()) {
            self.logger
                .error(&format!("Could not persist favorites under '{}': {}", self.key, e));
        }
        self.logger.debug(&format!(
            "Recipe {} {} favorites",
            id,
            if is_favorite { "added to" } else { "removed from" }
        ));
        is_favorite
    }

    fn favorite_ids(&self) -> FavoriteSet {
        self.favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn favorite_recipes(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let favorites = self.favorite_ids();
        recipes
            .iter()
            .filter(|r| favorites.contains(r.id))
            .cloned()
            .collect()
    }
}
