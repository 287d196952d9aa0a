//! # Product Catalog
//!
//! The fixed set of purchasable products for a session. Built once at
//! startup (from `config/products.toml` or the built-in list) and never
//! mutated afterwards. Products are shared with cart line items via `Arc`.

use crate::error::{CartError, CartResult};
use crate::product::{Price, Product, ProductId};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Immutable product catalog
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Arc<Product>>,
}

impl ProductCatalog {
    /// Build a catalog from products, rejecting an empty list, duplicate ids
    /// and blank names
    pub fn new(products: impl IntoIterator<Item = Product>) -> CartResult<Self> {
        let mut seen = HashSet::new();
        let mut catalog = Vec::new();

        for product in products {
            if product.name.trim().is_empty() {
                return Err(CartError::Configuration(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if !seen.insert(product.id) {
                return Err(CartError::Configuration(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            catalog.push(Arc::new(product));
        }

        if catalog.is_empty() {
            return Err(CartError::Configuration(
                "catalog has no products".to_string(),
            ));
        }

        Ok(Self { products: catalog })
    }

    /// The demo catalog: Book, Pen and Notebook
    pub fn builtin() -> Self {
        let products = [
            Product::new(1, "Book", Price::rupees(100)),
            Product::new(2, "Pen", Price::rupees(10)),
            Product::new(3, "Notebook", Price::rupees(50)),
        ];
        Self {
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> CartResult<Self> {
        let file: CatalogFile =
            toml::from_str(toml_str).map_err(|e| CartError::Configuration(e.to_string()))?;
        Self::new(file.products)
    }

    /// All products, in catalog order
    pub fn list_products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Find a product by ID
    pub fn find(&self, id: ProductId) -> CartResult<Arc<Product>> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CartError::NotFound {
                product_id: id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
