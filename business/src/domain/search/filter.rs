use super::model::{AdvancedSearchCriteria, NormalizedQuery};
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::value_objects::Category;

fn in_category(recipe: &Recipe, category: Option<Category>) -> bool {
    category.is_none_or(|c| recipe.category == c)
}

fn name_matches(recipe: &Recipe, query: &NormalizedQuery) -> bool {
    query.found_in(&recipe.name)
}

fn any_ingredient_matches(recipe: &Recipe, query: &NormalizedQuery) -> bool {
    query.is_empty() || recipe.ingredients.iter().any(|i| query.found_in(i))
}

/// Filters `recipes` by free text and optional category.
///
/// The text matches when the normalized query is empty, or is a
/// case-insensitive substring of the name or of any ingredient. Both
/// predicates must hold. Input order is preserved and the function has no
/// side effects, so repeated calls with equal inputs return equal lists.
pub fn apply(recipes: &[Recipe], query: &str, category: Option<Category>) -> Vec<Recipe> {
    let query = NormalizedQuery::new(query);

    recipes
        .iter()
        .filter(|r| in_category(r, category))
        .filter(|r| name_matches(r, &query) || any_ingredient_matches(r, &query))
        .cloned()
        .collect()
}

/// Filters with separate name and ingredient fields.
///
/// Each non-empty field constrains only its own dimension; all predicates
/// are combined with AND. Order-preserving and pure like [`apply`].
pub fn apply_advanced(recipes: &[Recipe], criteria: &AdvancedSearchCriteria) -> Vec<Recipe> {
    let name = NormalizedQuery::new(&criteria.name);
    let ingredient = NormalizedQuery::new(&criteria.ingredient);

    recipes
        .iter()
        .filter(|r| in_category(r, criteria.category))
        .filter(|r| name_matches(r, &name))
        .filter(|r| any_ingredient_matches(r, &ingredient))
        .cloned()
        .collect()
}
