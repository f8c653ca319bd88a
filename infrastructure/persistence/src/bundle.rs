use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use business::domain::errors::RepositoryError;
use business::domain::recipe::repository::{ImageLookup, RecipeSource};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("bundle.invalid_resource_name")]
    InvalidResourceName,
    #[error("bundle.io_error")]
    Io(#[from] std::io::Error),
}

impl From<BundleError> for RepositoryError {
    fn from(e: BundleError) -> Self {
        match e {
            BundleError::InvalidResourceName => RepositoryError::NotFound,
            BundleError::Io(io) if io.kind() == ErrorKind::NotFound => RepositoryError::NotFound,
            BundleError::Io(_) => RepositoryError::Persistence,
        }
    }
}

/// Read-only resource bundle rooted at a directory.
///
/// Layout:
/// - `<root>/<name>.json` for named resources
/// - `<root>/images/<imageName>.<ext>` for image assets
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }

    /// Resolves a resource name to its file, refusing anything that would
    /// leave the bundle root.
    fn resource_path(&self, resource_name: &str) -> Result<PathBuf, BundleError> {
        let invalid = resource_name.is_empty()
            || resource_name.contains(['/', '\\'])
            || resource_name.starts_with('.');
        if invalid {
            return Err(BundleError::InvalidResourceName);
        }
        Ok(self.root.join(format!("{}.json", resource_name)))
    }

    fn read_resource(&self, resource_name: &str) -> Result<Vec<u8>, BundleError> {
        let path = self.resource_path(resource_name)?;
        let bytes = fs::read(&path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read bundle resource");
        Ok(bytes)
    }
}

impl RecipeSource for DirectoryBundle {
    fn read(&self, resource_name: &str) -> Result<Vec<u8>, RepositoryError> {
        self.read_resource(resource_name).map_err(|e| {
            tracing::warn!(
                root = %self.root.display(),
                resource = resource_name,
                error = ?e,
                "Bundle resource unavailable"
            );
            e.into()
        })
    }
}

impl ImageLookup for DirectoryBundle {
    fn contains(&self, image_name: &str) -> bool {
        let Ok(entries) = fs::read_dir(self.images_dir()) else {
            return false;
        };

        entries.filter_map(Result::ok).any(|entry| {
            let path = entry.path();
            path.is_file() && path.file_stem().is_some_and(|stem| stem == image_name)
        })
    }
}
