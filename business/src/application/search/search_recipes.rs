use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::use_cases::catalog::RecipeCatalog;
use crate::domain::search::filter;
use crate::domain::search::model::{AdvancedSearchCriteria, SearchCriteria};
use crate::domain::search::use_cases::search_recipes::SearchRecipesUseCase;

pub struct SearchRecipesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl SearchRecipesUseCase for SearchRecipesUseCaseImpl {
    fn execute(&self, criteria: &SearchCriteria) -> Vec<Recipe> {
        let recipes = self.catalog.recipes();
        let found = filter::apply(&recipes, &criteria.query, criteria.category);
        self.logger.debug(&format!(
            "Search '{}' in {:?}: {} of {} recipes",
            criteria.query,
            criteria.category,
            found.len(),
            recipes.len()
        ));
        found
    }

    fn execute_advanced(&self, criteria: &AdvancedSearchCriteria) -> Vec<Recipe> {
        let recipes = self.catalog.recipes();
        let found = filter::apply_advanced(&recipes, criteria);
        self.logger.debug(&format!(
            "Search name '{}' ingredient '{}' in {:?}: {} of {} recipes",
            criteria.name,
            criteria.ingredient,
            criteria.category,
            found.len(),
            recipes.len()
        ));
        found
    }
}
