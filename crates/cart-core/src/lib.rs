//! # cart-core
//!
//! Core types for the counter-cart shopping cart.
//!
//! This crate provides:
//! - `Product`, `ProductId` and `Price` value types
//! - `ProductCatalog`, the fixed list of purchasable products
//! - `Cart` and `LineItem`, with merge-on-add semantics
//! - `CartError` for typed error handling
//!
//! It has no UI dependency; front ends own a catalog and a cart and call
//! into them.
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{Cart, Price, ProductCatalog, ProductId};
//!
//! let catalog = ProductCatalog::builtin();
//! let mut cart = Cart::new();
//!
//! let book = catalog.find(ProductId(1))?;
//! cart.add(&book, 2)?;
//! cart.add(&book, 3)?;
//!
//! assert_eq!(cart.line_items().len(), 1);
//! assert_eq!(cart.total(), Price::rupees(500));
//! # Ok::<(), cart_core::CartError>(())
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod product;

// Re-exports for convenience
pub use cart::{Cart, LineItem};
pub use catalog::ProductCatalog;
pub use error::{CartError, CartResult};
pub use product::{Price, Product, ProductId, CURRENCY_SYMBOL};
