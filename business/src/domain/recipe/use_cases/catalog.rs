use std::sync::Arc;

use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::RecipeId;

/// Read access to the validated recipe catalog.
///
/// Every method is infallible: load failures degrade to an empty catalog.
/// Snapshots are shared and immutable; a reload swaps the whole list.
pub trait RecipeCatalog: Send + Sync {
    /// Loads the catalog on first use and returns the current snapshot.
    fn load(&self) -> Arc<Vec<Recipe>>;
    /// Re-reads the resource and atomically replaces the snapshot.
    fn reload(&self) -> Arc<Vec<Recipe>>;
    /// Current snapshot, empty until the first load.
    fn recipes(&self) -> Arc<Vec<Recipe>>;
    fn find_by_id(&self, id: RecipeId) -> Option<Recipe>;
    /// First `limit` recipes in catalog order.
    fn featured(&self, limit: usize) -> Vec<Recipe>;
    fn classics(&self) -> Vec<Recipe>;
}
