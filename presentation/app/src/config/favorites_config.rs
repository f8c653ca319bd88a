use std::env;
use std::path::PathBuf;

use business::application::favorite::registry::DEFAULT_FAVORITES_KEY;

pub const DEFAULT_FAVORITES_FILE: &str = "favorites.json";

/// Backing store for the favorites registry.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesConfig {
    pub backend: StoreBackend,
    pub key: String,
}

impl FavoritesConfig {
    /// Load favorites configuration from environment variables
    ///
    /// Environment variables:
    /// - FAVORITES_STORE: "file" or "memory" (default: "file")
    /// - FAVORITES_FILE: JSON store path for the file backend (default: "favorites.json")
    /// - FAVORITES_KEY: storage key (default: "favorite_recipe_ids")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = match lookup("FAVORITES_STORE").as_deref().map(str::trim) {
            Some(kind) if kind.eq_ignore_ascii_case("memory") => StoreBackend::Memory,
            Some(kind) if !kind.eq_ignore_ascii_case("file") => {
                tracing::warn!(value = kind, "Unknown FAVORITES_STORE, using file");
                Self::file_backend(&lookup)
            }
            _ => Self::file_backend(&lookup),
        };
        let key = lookup("FAVORITES_KEY").unwrap_or_else(|| DEFAULT_FAVORITES_KEY.to_string());

        Self { backend, key }
    }

    fn file_backend(lookup: &impl Fn(&str) -> Option<String>) -> StoreBackend {
        let path = lookup("FAVORITES_FILE").unwrap_or_else(|| DEFAULT_FAVORITES_FILE.to_string());
        StoreBackend::File(PathBuf::from(path))
    }
}
