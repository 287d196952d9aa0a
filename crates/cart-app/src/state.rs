//! # Application State
//!
//! Configuration and startup wiring for the storefront.
//! Owns the product catalog and hands it to the [`Storefront`].

use crate::storefront::Storefront;
use anyhow::Context;
use cart_core::ProductCatalog;
use std::path::{Path, PathBuf};

/// Catalog files tried, in order, when no path is configured
const CATALOG_SEARCH_PATHS: [&str; 3] = [
    "config/products.toml",
    "../config/products.toml",
    "../../config/products.toml",
];

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit catalog file
    pub catalog_path: Option<PathBuf>,
    /// Title shown above the storefront
    pub title: String,
    /// Environment (development, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_path: lookup("CART_CATALOG_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            title: lookup("CART_TITLE").unwrap_or_else(|| "Shopping Cart".to_string()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Builder: override the catalog file
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Startup state: config plus the loaded catalog
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: ProductCatalog,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = load_product_catalog(config.catalog_path.as_deref())?;
        Ok(Self { config, catalog })
    }

    /// Hand the catalog to a fresh storefront with an empty cart
    pub fn into_storefront(self) -> Storefront {
        Storefront::new(self.catalog)
    }
}

/// Load the product catalog.
///
/// An explicit path must be readable. Otherwise the search paths are tried
/// and the built-in catalog is used if none exist.
pub fn load_product_catalog(explicit: Option<&Path>) -> anyhow::Result<ProductCatalog> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = ProductCatalog::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
        return Ok(catalog);
    }

    for path in CATALOG_SEARCH_PATHS {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = ProductCatalog::from_toml(&content)
                .with_context(|| format!("Failed to parse {}", path))?;
            tracing::info!("Loaded {} products from {}", catalog.len(), path);
            return Ok(catalog);
        }
    }

    tracing::info!("No catalog file found, using built-in catalog");
    Ok(ProductCatalog::builtin())
}
