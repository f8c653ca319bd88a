use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::{CatalogError, RecipeWarning};
use crate::domain::recipe::model::{Recipe, RecipeRecord};
use crate::domain::recipe::repository::{ImageLookup, RecipeSource};
use crate::domain::recipe::use_cases::catalog::RecipeCatalog;
use crate::domain::shared::value_objects::RecipeId;

pub const DEFAULT_RESOURCE_NAME: &str = "recipes";

pub struct RecipeCatalogImpl {
    source: Arc<dyn RecipeSource>,
    images: Option<Arc<dyn ImageLookup>>,
    logger: Arc<dyn Logger>,
    resource_name: String,
    snapshot: RwLock<Option<Arc<Vec<Recipe>>>>,
}

impl RecipeCatalogImpl {
    pub fn new(
        source: Arc<dyn RecipeSource>,
        logger: Arc<dyn Logger>,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            source,
            images: None,
            logger,
            resource_name: resource_name.into(),
            snapshot: RwLock::new(None),
        }
    }

    /// Enables the missing-image check against an asset lookup.
    pub fn with_image_lookup(mut self, images: Arc<dyn ImageLookup>) -> Self {
        self.images = Some(images);
        self
    }

    fn read_records(&self) -> Result<Vec<RecipeRecord>, CatalogError> {
        let bytes = self
            .source
            .read(&self.resource_name)
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    CatalogError::ResourceNotFound(self.resource_name.clone())
                }
                other => CatalogError::Repository(other),
            })?;

        serde_json::from_slice::<Vec<RecipeRecord>>(&bytes)
            .map_err(|e| CatalogError::DecodeFailure(e.to_string()))
    }

    fn validate(&self, records: Vec<RecipeRecord>) -> Vec<Recipe> {
        let total = records.len();
        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(total);
        let mut warning_count = 0;

        for (index, record) in records.into_iter().enumerate() {
            let id = record.id;
            let recipe = match record.into_domain() {
                Ok(recipe) => recipe,
                Err(rejection) => {
                    self.logger.warn(&format!(
                        "Dropping recipe #{} (id {}): {}",
                        index, id, rejection
                    ));
                    continue;
                }
            };

            let mut warnings = recipe.warnings(self.images.as_deref());
            if !seen.insert(recipe.id) {
                warnings.push(RecipeWarning::DuplicateId);
            }
            for warning in &warnings {
                self.logger
                    .warn(&format!("Recipe {} '{}': {}", recipe.id, recipe.name, warning));
            }
            warning_count += warnings.len();

            recipes.push(recipe);
        }

        self.logger.info(&format!(
            "Catalog '{}': {} records read, {} kept, {} rejected, {} warnings",
            self.resource_name,
            total,
            recipes.len(),
            total - recipes.len(),
            warning_count
        ));
        recipes
    }

    fn build(&self) -> Arc<Vec<Recipe>> {
        match self.read_records() {
            Ok(records) => Arc::new(self.validate(records)),
            Err(e) => {
                self.logger
                    .error(&format!("Catalog '{}' unavailable: {}", self.resource_name, e));
                Arc::new(Vec::new())
            }
        }
    }

    fn current(&self) -> Option<Arc<Vec<Recipe>>> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RecipeCatalog for RecipeCatalogImpl {
    fn load(&self) -> Arc<Vec<Recipe>> {
        if let Some(recipes) = self.current() {
            return recipes;
        }

        let mut slot = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(recipes) = slot.as_ref() {
            return recipes.clone();
        }
        self.logger
            .info(&format!("Loading catalog '{}'", self.resource_name));
        let recipes = self.build();
        *slot = Some(recipes.clone());
        recipes
    }

    fn reload(&self) -> Arc<Vec<Recipe>> {
        self.logger
            .info(&format!("Reloading catalog '{}'", self.resource_name));
        let recipes = self.build();
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(recipes.clone());
        recipes
    }

    fn recipes(&self) -> Arc<Vec<Recipe>> {
        self.current().unwrap_or_default()
    }

    fn find_by_id(&self, id: RecipeId) -> Option<Recipe> {
        self.recipes().iter().find(|r| r.id == id).cloned()
    }

    fn featured(&self, limit: usize) -> Vec<Recipe> {
        self.recipes().iter().take(limit).cloned().collect()
    }

    fn classics(&self) -> Vec<Recipe> {
        self.recipes()
            .iter()
            .filter(|r| r.is_portuguese_classic)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::value_objects::Category;
    use mockall::mock;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub Source {}

        impl RecipeSource for Source {
            fn read(&self, resource_name: &str) -> Result<Vec<u8>, RepositoryError>;
        }
    }

    mock! {
        pub Images {}

        impl ImageLookup for Images {
            fn contains(&self, image_name: &str) -> bool;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn source_returning(json: &'static str) -> Arc<dyn RecipeSource> {
        let mut source = MockSource::new();
        source
            .expect_read()
            .withf(|name| name == "recipes")
            .returning(move |_| Ok(json.as_bytes().to_vec()));
        Arc::new(source)
    }

    fn catalog(source: Arc<dyn RecipeSource>) -> RecipeCatalogImpl {
        RecipeCatalogImpl::new(source, mock_logger(), DEFAULT_RESOURCE_NAME)
    }

    fn ids(recipes: &[Recipe]) -> Vec<i64> {
        recipes.iter().map(|r| r.id.value()).collect()
    }

    const ONE_RECIPE: &str = r#"[
        {"id": 1, "name": "Bacalhau", "imageName": "bacalhau", "category": "Fish",
         "prepTimeMinutes": 30, "calories": 400, "ingredients": ["bacalhau"], "steps": ["cozer"]}
    ]"#;

    const MIXED: &str = r#"[
        {"id": 1, "name": "Bacalhau", "imageName": "bacalhau", "category": "Fish",
         "prepTimeMinutes": 30, "calories": 400, "ingredients": ["bacalhau"], "steps": ["cozer"]},
        {"id": 2, "name": "   ", "imageName": "x", "category": "Meat",
         "prepTimeMinutes": 30, "calories": 400, "ingredients": ["x"], "steps": ["x"]},
        {"id": 3, "name": "Sopa da Pedra", "imageName": "sopa", "category": "Breakfast",
         "prepTimeMinutes": 30, "calories": 400, "ingredients": ["x"], "steps": ["x"]},
        {"id": 4, "name": "Pastel de Nata", "imageName": "nata", "category": "dessert",
         "prepTimeMinutes": 0, "calories": 0, "ingredients": [], "steps": [],
         "isPortugueseClassic": true},
        {"id": 5, "name": "Tosta Mista", "imageName": "tosta", "category": "Snack",
         "prepTimeMinutes": 5, "calories": 300, "ingredients": ["bread"], "steps": ["toast"],
         "isPortugueseClassic": false}
    ]"#;

    #[test]
    fn should_load_recipes_from_resource() {
        let catalog = catalog(source_returning(ONE_RECIPE));

        let recipes = catalog.load();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, RecipeId::new(1));
        assert_eq!(recipes[0].name, "Bacalhau");
    }

    #[test]
    fn should_drop_empty_names_and_unknown_categories_keeping_order() {
        let catalog = catalog(source_returning(MIXED));

        let recipes = catalog.load();

        assert_eq!(ids(&recipes), vec![1, 4, 5]);
        assert_eq!(recipes[1].category, Category::Dessert);
    }

    #[test]
    fn should_return_empty_when_resource_missing() {
        let mut source = MockSource::new();
        source
            .expect_read()
            .returning(|_| Err(RepositoryError::NotFound));
        let catalog = catalog(Arc::new(source));

        assert!(catalog.load().is_empty());
    }

    #[test]
    fn should_log_error_when_resource_missing() {
        let mut source = MockSource::new();
        source
            .expect_read()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|m| m.contains("catalog.resource_not_found"))
            .times(1)
            .returning(|_| ());
        let catalog = RecipeCatalogImpl::new(Arc::new(source), Arc::new(logger), "recipes");

        assert!(catalog.load().is_empty());
    }

    #[test]
    fn should_return_empty_when_json_malformed() {
        let catalog = catalog(source_returning("[{\"id\": \"one\"}"));

        assert!(catalog.load().is_empty());
    }

    #[test]
    fn should_log_decode_failure_with_cause() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|m| m.contains("catalog.decode_failure") && m.contains("invalid type"))
            .times(1)
            .returning(|_| ());
        let catalog = RecipeCatalogImpl::new(
            source_returning("[{\"id\": \"one\"}]"),
            Arc::new(logger),
            "recipes",
        );

        assert!(catalog.load().is_empty());
    }

    #[test]
    fn should_log_load_summary() {
        let infos = Arc::new(Mutex::new(Vec::new()));
        let captured = infos.clone();
        let mut logger = MockLog::new();
        logger
            .expect_info()
            .returning(move |m| captured.lock().unwrap().push(m.to_string()));
        logger.expect_warn().returning(|_| ());
        let catalog = RecipeCatalogImpl::new(source_returning(MIXED), Arc::new(logger), "recipes");

        catalog.load();

        let infos = infos.lock().unwrap();
        assert!(infos.contains(
            &"Catalog 'recipes': 5 records read, 3 kept, 2 rejected, 4 warnings".to_string()
        ));
    }

    #[test]
    fn should_return_empty_when_document_is_not_a_list() {
        let catalog = catalog(source_returning(r#"{"recipes": []}"#));

        assert!(catalog.load().is_empty());
    }

    #[test]
    fn should_return_empty_when_source_fails() {
        let mut source = MockSource::new();
        source
            .expect_read()
            .returning(|_| Err(RepositoryError::Persistence));
        let catalog = catalog(Arc::new(source));

        assert!(catalog.load().is_empty());
    }

    #[test]
    fn should_warn_but_keep_low_quality_recipe() {
        let recipe_4_warnings = Arc::new(AtomicUsize::new(0));
        let counter = recipe_4_warnings.clone();
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(move |m| {
            if m.starts_with("Recipe 4") {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        let catalog = RecipeCatalogImpl::new(source_returning(MIXED), Arc::new(logger), "recipes");

        let recipes = catalog.load();

        assert!(recipes.iter().any(|r| r.id == RecipeId::new(4)));
        assert_eq!(recipe_4_warnings.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn should_warn_when_image_missing() {
        let mut images = MockImages::new();
        images
            .expect_contains()
            .withf(|name| name == "bacalhau")
            .returning(|_| false);
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|m| m.contains("recipe.missing_image"))
            .times(1)
            .returning(|_| ());
        let catalog =
            RecipeCatalogImpl::new(source_returning(ONE_RECIPE), Arc::new(logger), "recipes")
                .with_image_lookup(Arc::new(images));

        assert_eq!(catalog.load().len(), 1);
    }

    #[test]
    fn should_keep_duplicate_ids_with_warning() {
        let json = r#"[
            {"id": 9, "name": "A", "imageName": "a", "category": "Other",
             "prepTimeMinutes": 1, "calories": 1, "ingredients": ["a"], "steps": ["a"]},
            {"id": 9, "name": "B", "imageName": "b", "category": "Other",
             "prepTimeMinutes": 1, "calories": 1, "ingredients": ["b"], "steps": ["b"]}
        ]"#;
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|m| m.contains("recipe.duplicate_id"))
            .times(1)
            .returning(|_| ());
        let catalog = RecipeCatalogImpl::new(source_returning(json), Arc::new(logger), "recipes");

        assert_eq!(catalog.load().len(), 2);
    }

    #[test]
    fn should_read_source_only_once_across_loads() {
        let mut source = MockSource::new();
        source
            .expect_read()
            .times(1)
            .returning(|_| Ok(ONE_RECIPE.as_bytes().to_vec()));
        let catalog = catalog(Arc::new(source));

        let first = catalog.load();
        let second = catalog.load();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn should_be_empty_before_first_load() {
        let source = MockSource::new();
        let catalog = catalog(Arc::new(source));

        assert!(catalog.recipes().is_empty());
        assert!(catalog.find_by_id(RecipeId::new(1)).is_none());
    }

    #[test]
    fn should_replace_whole_list_on_reload() {
        let documents = Mutex::new(vec![MIXED, ONE_RECIPE]);
        let mut source = MockSource::new();
        source.expect_read().times(2).returning(move |_| {
            let next = documents.lock().unwrap().pop().unwrap();
            Ok(next.as_bytes().to_vec())
        });
        let catalog = catalog(Arc::new(source));

        let before = catalog.load();
        let after = catalog.reload();

        assert_eq!(ids(&before), vec![1]);
        assert_eq!(ids(&after), vec![1, 4, 5]);
        assert_eq!(ids(&catalog.recipes()), vec![1, 4, 5]);
        assert_eq!(ids(&before), vec![1]);
    }

    #[test]
    fn should_empty_catalog_when_reload_fails() {
        let calls = Mutex::new(0);
        let mut source = MockSource::new();
        source.expect_read().returning(move |_| {
            let mut calls = calls.lock().unwrap();
            *calls += 1;
            if *calls == 1 {
                Ok(ONE_RECIPE.as_bytes().to_vec())
            } else {
                Err(RepositoryError::NotFound)
            }
        });
        let catalog = catalog(Arc::new(source));

        assert_eq!(catalog.load().len(), 1);
        assert!(catalog.reload().is_empty());
        assert!(catalog.recipes().is_empty());
    }

    #[test]
    fn should_find_recipe_by_id() {
        let catalog = catalog(source_returning(MIXED));
        catalog.load();

        let found = catalog.find_by_id(RecipeId::new(5)).unwrap();

        assert_eq!(found.name, "Tosta Mista");
        assert!(catalog.find_by_id(RecipeId::new(2)).is_none());
    }

    #[test]
    fn should_return_first_recipes_as_featured() {
        let catalog = catalog(source_returning(MIXED));
        catalog.load();

        assert_eq!(ids(&catalog.featured(2)), vec![1, 4]);
        assert_eq!(ids(&catalog.featured(10)), vec![1, 4, 5]);
        assert!(catalog.featured(0).is_empty());
    }

    #[test]
    fn should_list_portuguese_classics() {
        let catalog = catalog(source_returning(MIXED));
        catalog.load();

        assert_eq!(ids(&catalog.classics()), vec![1, 4]);
    }
}
