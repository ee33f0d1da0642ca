//! Application state shared across handlers.

use std::path::Path;
use std::sync::Arc;

use icanmake3d_core::{Catalog, CatalogData, CatalogError};
use thiserror::Error;

use crate::carts::CartRegistry;
use crate::config::StorefrontConfig;

/// Error loading the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the live carts, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartRegistry,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Validated catalog to serve
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let carts = CartRegistry::new(config.max_carts, config.session_expiry);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart registry.
    #[must_use]
    pub fn carts(&self) -> &CartRegistry {
        &self.inner.carts
    }
}

/// Load the catalog named by the configuration, or the built-in one.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the catalog
/// fails validation.
pub fn load_catalog(config: &StorefrontConfig) -> Result<Catalog, CatalogLoadError> {
    match &config.catalog_path {
        Some(path) => catalog_from_file(path),
        None => Ok(Catalog::builtin()?),
    }
}

fn catalog_from_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let content = std::fs::read_to_string(path)?;
    let data: CatalogData = serde_json::from_str(&content)?;
    Ok(Catalog::from_data(data)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_with_catalog(path: Option<&Path>) -> StorefrontConfig {
        let mut config = StorefrontConfig::from_lookup(|_| None).unwrap();
        config.catalog_path = path.map(Path::to_path_buf);
        config
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = load_catalog(&config_with_catalog(None)).unwrap();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_load_catalog_file() {
        let mut data = Catalog::builtin().unwrap().to_data();
        data.items.truncate(2);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&data).unwrap().as_bytes())
            .unwrap();

        let catalog = load_catalog(&config_with_catalog(Some(file.path()))).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find_by_slug("medieval-longsword").is_some());
    }

    #[test]
    fn test_load_invalid_catalog_file() {
        let mut data = Catalog::builtin().unwrap().to_data();
        let duplicate = data.items.first().cloned().unwrap();
        data.items.push(duplicate);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&data).unwrap().as_bytes())
            .unwrap();

        let err = load_catalog(&config_with_catalog(Some(file.path()))).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Invalid(CatalogError::DuplicateItemId(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(&config_with_catalog(Some(Path::new(
            "/nonexistent/catalog.json",
        ))))
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io(_)));
    }
}
