use super::{catalog_config::CatalogConfig, favorites_config::FavoritesConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub favorites: FavoritesConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig::from_env(),
            favorites: FavoritesConfig::from_env(),
        }
    }
}
