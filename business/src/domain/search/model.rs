use crate::domain::recipe::value_objects::Category;

/// Search text after trimming and lower-casing.
/// An empty normalized query matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring test against `text`.
    pub fn found_in(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.0)
    }
}

/// Inputs of the combined name/ingredient search.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub query: String,
    pub category: Option<Category>,
}

/// Inputs of the search screen with separate name and ingredient fields.
#[derive(Debug, Clone, Default)]
pub struct AdvancedSearchCriteria {
    pub name: String,
    pub ingredient: String,
    pub category: Option<Category>,
}
