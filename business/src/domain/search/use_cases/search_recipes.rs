use crate::domain::recipe::model::Recipe;
use crate::domain::search::model::{AdvancedSearchCriteria, SearchCriteria};

/// Runs the search filter against the current catalog snapshot.
pub trait SearchRecipesUseCase: Send + Sync {
    fn execute(&self, criteria: &SearchCriteria) -> Vec<Recipe>;
    fn execute_advanced(&self, criteria: &AdvancedSearchCriteria) -> Vec<Recipe>;
}
