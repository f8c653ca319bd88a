use std::env;
use std::path::PathBuf;

use business::application::recipe::catalog::DEFAULT_RESOURCE_NAME;

pub const DEFAULT_RECIPES_DIR: &str = "resources";
pub const DEFAULT_FEATURED_LIMIT: usize = 7;

/// Where the recipe bundle lives and how much of it the home screen features.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub recipes_dir: PathBuf,
    pub resource_name: String,
    pub featured_limit: usize,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - RECIPES_DIR: bundle directory (default: "resources")
    /// - RECIPES_RESOURCE: resource name without extension (default: "recipes")
    /// - FEATURED_LIMIT: number of featured recipes (default: 7)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let recipes_dir = lookup("RECIPES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECIPES_DIR));
        let resource_name =
            lookup("RECIPES_RESOURCE").unwrap_or_else(|| DEFAULT_RESOURCE_NAME.to_string());
        let featured_limit = match lookup("FEATURED_LIMIT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid FEATURED_LIMIT, using default");
                DEFAULT_FEATURED_LIMIT
            }),
            None => DEFAULT_FEATURED_LIMIT,
        };

        Self {
            recipes_dir,
            resource_name,
            featured_limit,
        }
    }
}
