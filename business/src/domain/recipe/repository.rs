use crate::domain::errors::RepositoryError;

/// Lookup-by-name access to bundled resources.
///
/// Returns the raw bytes of the named resource, or
/// `RepositoryError::NotFound` when no such resource exists.
pub trait RecipeSource: Send + Sync {
    fn read(&self, resource_name: &str) -> Result<Vec<u8>, RepositoryError>;
}

/// Answers whether a referenced image asset is present.
pub trait ImageLookup: Send + Sync {
    fn contains(&self, image_name: &str) -> bool;
}
