use business::domain::recipe::value_objects::Category;
use business::domain::search::model::SearchCriteria;
use strum::IntoEnumIterator;

use super::dependency_injection::DependencyContainer;
use crate::config::app_config::AppConfig;

/// What the host has available after boot.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupSummary {
    pub recipes: usize,
    pub per_category: Vec<(Category, usize)>,
    pub featured: Vec<String>,
    pub classics: usize,
    pub favorites: usize,
}

pub struct Startup;

impl Startup {
    /// Loads the catalog once and reports what the UI layer will receive.
    pub fn run(config: &AppConfig, container: &DependencyContainer) -> StartupSummary {
        let recipes = container.catalog.load();

        let per_category = Category::iter()
            .map(|c| {
                let criteria = SearchCriteria {
                    query: String::new(),
                    category: Some(c),
                };
                (c, container.search.execute(&criteria).len())
            })
            .collect();
        let featured = container
            .catalog
            .featured(config.catalog.featured_limit)
            .into_iter()
            .map(|r| r.name)
            .collect();
        let favorites = container.favorites.favorite_recipes(&recipes).len();

        let summary = StartupSummary {
            recipes: recipes.len(),
            per_category,
            featured,
            classics: container.catalog.classics().len(),
            favorites,
        };

        tracing::info!(
            recipes = summary.recipes,
            classics = summary.classics,
            favorites = summary.favorites,
            "Recipe core ready"
        );
        for (category, count) in &summary.per_category {
            tracing::info!(category = %category, count, "Category");
        }
        tracing::info!(featured = ?summary.featured, "Featured recipes");

        summary
    }
}
