use crate::domain::favorite::model::FavoriteSet;
use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::RecipeId;

/// Favorite-ID set with write-through persistence.
pub trait FavoritesRegistry: Send + Sync {
    fn is_favorite(&self, id: RecipeId) -> bool;
    /// Flips membership, persists the whole set, and returns the new state.
    /// Persistence failures are logged, never returned.
    fn toggle(&self, id: RecipeId) -> bool;
    fn favorite_ids(&self) -> FavoriteSet;
    /// Recipes from `recipes` that are favorites, in the given order.
    fn favorite_recipes(&self, recipes: &[Recipe]) -> Vec<Recipe>;
}
