//! # Cart Types
//!
//! The shopping cart and its line items.
//!
//! A cart holds at most one [`LineItem`] per product id. Adding a product that
//! is already in the cart bumps the existing row's quantity instead of
//! appending a second row; rows otherwise keep insertion order.

use crate::error::{CartError, CartResult};
use crate::product::{Price, Product, ProductId};
use std::sync::Arc;
use tracing::debug;

/// A product and how many of it are in the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product: Arc<Product>,
    quantity: u32,
}

impl LineItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Always at least 1
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity
    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An in-memory shopping cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` of `product`, merging with an existing row for the
    /// same product id.
    ///
    /// Fails with [`CartError::InvalidQuantity`] if `quantity < 1` or the
    /// merged quantity would overflow. The cart is untouched on failure.
    pub fn add(&mut self, product: &Arc<Product>, quantity: i64) -> CartResult<()> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| CartError::invalid_quantity(quantity))?;

        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| CartError::invalid_quantity(quantity))?;
                debug!(
                    product_id = %product.id,
                    quantity = item.quantity,
                    "merged into existing line item"
                );
            }
            None => {
                self.items.push(LineItem {
                    product: Arc::clone(product),
                    quantity,
                });
                debug!(product_id = %product.id, quantity, "appended line item");
            }
        }

        Ok(())
    }

    /// Remove the line item for `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ProductId) -> Option<LineItem> {
        let index = self.items.iter().position(|i| i.product.id == id)?;
        Some(self.items.remove(index))
    }

    /// Sum of every line item's subtotal
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Line items in insertion order
    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Arc<Product> {
        Arc::new(Product::new(1, "Book", Price::rupees(100)))
    }

    fn pen() -> Arc<Product> {
        Arc::new(Product::new(2, "Pen", Price::rupees(10)))
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        cart.add(&book(), 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line_items()[0].quantity(), 2);
        assert_eq!(cart.line_items()[0].subtotal(), Price::rupees(200));
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::new();
        let book = book();
        cart.add(&book, 2).unwrap();
        cart.add(&book, 3).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId(1)).unwrap().quantity(), 5);
    }

    #[test]
    fn test_add_merges_by_id_not_identity() {
        let mut cart = Cart::new();
        cart.add(&book(), 1).unwrap();
        cart.add(&book(), 1).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&pen(), 1).unwrap();
        cart.add(&book(), 1).unwrap();
        cart.add(&pen(), 1).unwrap();

        let ids: Vec<_> = cart.line_items().iter().map(LineItem::product_id).collect();
        assert_eq!(ids, [ProductId(2), ProductId(1)]);
    }

    #[test]
    fn test_add_rejects_non_positive() {
        let mut cart = Cart::new();
        cart.add(&book(), 1).unwrap();

        assert_eq!(
            cart.add(&book(), 0),
            Err(CartError::InvalidQuantity {
                quantity: "0".into()
            })
        );
        assert!(cart.add(&pen(), -1).is_err());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_rejects_overflow() {
        let mut cart = Cart::new();
        cart.add(&book(), i64::from(u32::MAX)).unwrap();

        assert!(cart.add(&book(), 1).is_err());
        assert!(cart.add(&pen(), i64::from(u32::MAX) + 1).is_err());
        assert_eq!(cart.get(ProductId(1)).unwrap().quantity(), u32::MAX);
        assert!(cart.get(ProductId(2)).is_none());
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(&book(), 1).unwrap();
        cart.add(&pen(), 4).unwrap();

        let removed = cart.remove(ProductId(1)).unwrap();
        assert_eq!(removed.product().name, "Book");
        assert_eq!(cart.len(), 1);
        assert!(cart.get(ProductId(1)).is_none());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add(&pen(), 1).unwrap();

        assert!(cart.remove(ProductId(99)).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Price::ZERO);

        cart.add(&book(), 2).unwrap();
        cart.add(&pen(), 3).unwrap();
        assert_eq!(cart.total(), Price::rupees(230));
        assert_eq!(cart.item_count(), 5);
    }
}
