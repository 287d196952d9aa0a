//! # Storefront
//!
//! The two user actions of the shop, independent of any terminal. A front
//! end supplies the current selection and the raw quantity text, shows user
//! errors as warnings and gives up on anything else.

use cart_core::{Cart, CartError, LineItem, ProductCatalog, ProductId};
use thiserror::Error;
use tracing::{info, warn};

/// Why a storefront action was refused
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("No product selected.")]
    NoProductSelected,

    #[error("No item selected.")]
    NoItemSelected,

    #[error(transparent)]
    Cart(#[from] CartError),
}

impl StorefrontError {
    /// Short heading for the warning shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            StorefrontError::NoProductSelected => "Please select a product",
            StorefrontError::NoItemSelected => "Select item",
            StorefrontError::Cart(CartError::InvalidQuantity { .. }) => "Invalid quantity",
            StorefrontError::Cart(CartError::NotFound { .. }) => "Unknown product",
            StorefrontError::Cart(CartError::Configuration(_)) => "Configuration error",
        }
    }

    /// Body text for the warning shown to the user
    pub fn message(&self) -> String {
        match self {
            StorefrontError::Cart(CartError::InvalidQuantity { quantity }) => {
                match quantity.parse::<i128>() {
                    Ok(n) if n > 0 => "Quantity is too large.".to_string(),
                    Ok(_) => "Quantity must be greater than zero.".to_string(),
                    Err(_) => "Quantity must be a whole number.".to_string(),
                }
            }
            other => other.to_string(),
        }
    }

    /// Missing selections and bad input are shown as warnings; anything
    /// else ends the session
    pub fn is_user_error(&self) -> bool {
        match self {
            StorefrontError::NoProductSelected | StorefrontError::NoItemSelected => true,
            StorefrontError::Cart(err) => err.is_user_error(),
        }
    }
}

/// Catalog plus the session's cart
#[derive(Debug)]
pub struct Storefront {
    catalog: ProductCatalog,
    cart: Cart,
}

impl Storefront {
    /// Create a storefront with an empty cart
    pub fn new(catalog: ProductCatalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// "Add to Cart": add the selected product with the typed quantity
    pub fn add_to_cart(
        &mut self,
        selection: Option<ProductId>,
        quantity_input: &str,
    ) -> Result<(), StorefrontError> {
        let Some(id) = selection else {
            warn!("add to cart without a selected product");
            return Err(StorefrontError::NoProductSelected);
        };

        let quantity = parse_quantity(quantity_input).map_err(|e| {
            warn!(input = quantity_input, "rejected quantity");
            e
        })?;
        let product = self.catalog.find(id)?;

        self.cart.add(&product, quantity).map_err(|e| {
            warn!(product_id = %id, quantity, "rejected quantity");
            e
        })?;

        info!(
            product = %product.name,
            quantity,
            total = %self.cart.total(),
            "added to cart"
        );
        Ok(())
    }

    /// "Remove Selected": drop the selected cart row
    pub fn remove_from_cart(
        &mut self,
        selection: Option<ProductId>,
    ) -> Result<Option<LineItem>, StorefrontError> {
        let Some(id) = selection else {
            warn!("remove without a selected cart item");
            return Err(StorefrontError::NoItemSelected);
        };

        let removed = self.cart.remove(id);
        match &removed {
            Some(item) => info!(
                product = %item.product().name,
                total = %self.cart.total(),
                "removed from cart"
            ),
            None => tracing::debug!(product_id = %id, "nothing to remove"),
        }
        Ok(removed)
    }
}

/// Parse typed quantity text. Anything that is not an integer is an
/// invalid quantity; range checks are left to the cart.
pub fn parse_quantity(input: &str) -> Result<i64, CartError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CartError::invalid_quantity(trimmed))
}
