use crate::domain::errors::RepositoryError;

/// Document-level failures while loading the catalog.
/// None of them escapes `load`/`reload`; they are logged and the catalog
/// falls back to an empty list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.resource_not_found: {0}")]
    ResourceNotFound(String),
    #[error("catalog.decode_failure: {0}")]
    DecodeFailure(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Reasons a single record is dropped from the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeRejection {
    #[error("recipe.name_empty")]
    NameEmpty,
    #[error("recipe.unknown_category: {0}")]
    UnknownCategory(String),
}

/// Data-quality findings on a record that is still kept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeWarning {
    #[error("recipe.no_ingredients")]
    NoIngredients,
    #[error("recipe.no_steps")]
    NoSteps,
    #[error("recipe.non_positive_prep_time: {0}")]
    NonPositivePrepTime(i64),
    #[error("recipe.non_positive_calories: {0}")]
    NonPositiveCalories(i64),
    #[error("recipe.missing_image: {0}")]
    MissingImage(String),
    #[error("recipe.duplicate_id")]
    DuplicateId,
}
