use serde::{Deserialize, Serialize};

use super::errors::{RecipeRejection, RecipeWarning};
use super::repository::ImageLookup;
use super::value_objects::Category;
use crate::domain::shared::value_objects::RecipeId;

/// A validated catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub image_name: String,
    pub category: Category,
    pub prep_time_minutes: i64,
    pub calories: i64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub is_portuguese_classic: bool,
}

pub struct NewRecipeProps {
    pub id: RecipeId,
    pub name: String,
    pub image_name: String,
    pub category: Category,
    pub prep_time_minutes: i64,
    pub calories: i64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub is_portuguese_classic: bool,
}

impl Recipe {
    pub fn new(props: NewRecipeProps) -> Result<Self, RecipeRejection> {
        if props.name.trim().is_empty() {
            return Err(RecipeRejection::NameEmpty);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            image_name: props.image_name,
            category: props.category,
            prep_time_minutes: props.prep_time_minutes,
            calories: props.calories,
            ingredients: props.ingredients,
            steps: props.steps,
            is_portuguese_classic: props.is_portuguese_classic,
        })
    }

    /// Advisory findings that do not prevent the recipe from being shown.
    ///
    /// Without an image lookup only an empty `image_name` counts as missing.
    pub fn warnings(&self, images: Option<&dyn ImageLookup>) -> Vec<RecipeWarning> {
        let mut warnings = Vec::new();

        if self.ingredients.is_empty() {
            warnings.push(RecipeWarning::NoIngredients);
        }
        if self.steps.is_empty() {
            warnings.push(RecipeWarning::NoSteps);
        }
        if self.prep_time_minutes <= 0 {
            warnings.push(RecipeWarning::NonPositivePrepTime(self.prep_time_minutes));
        }
        if self.calories <= 0 {
            warnings.push(RecipeWarning::NonPositiveCalories(self.calories));
        }

        let image_missing = self.image_name.trim().is_empty()
            || images.is_some_and(|lookup| !lookup.contains(&self.image_name));
        if image_missing {
            warnings.push(RecipeWarning::MissingImage(self.image_name.clone()));
        }

        warnings
    }
}

fn default_portuguese_classic() -> bool {
    true
}

/// One entry of the catalog resource as it appears on disk, before
/// validation. The category stays a raw tag so that an unknown value drops
/// only this record instead of failing the whole document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: RecipeId,
    pub name: String,
    pub image_name: String,
    pub category: String,
    pub prep_time_minutes: i64,
    pub calories: i64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default = "default_portuguese_classic")]
    pub is_portuguese_classic: bool,
}

impl RecipeRecord {
    pub fn into_domain(self) -> Result<Recipe, RecipeRejection> {
        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| RecipeRejection::UnknownCategory(self.category.clone()))?;

        Recipe::new(NewRecipeProps {
            id: self.id,
            name: self.name,
            image_name: self.image_name,
            category,
            prep_time_minutes: self.prep_time_minutes,
            calories: self.calories,
            ingredients: self.ingredients,
            steps: self.steps,
            is_portuguese_classic: self.is_portuguese_classic,
        })
    }
}
