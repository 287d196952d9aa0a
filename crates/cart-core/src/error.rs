//! # Cart Error Types
//!
//! Typed error handling for counter-cart.
//! Catalog and cart operations return `Result<T, CartError>`.

use thiserror::Error;

/// Core error type for catalog and cart operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity was zero, negative, not an integer, or would overflow
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: String },

    /// Product not found in catalog
    #[error("Product not found: {product_id}")]
    NotFound { product_id: String },

    /// Catalog configuration errors (bad TOML, duplicate ids)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CartError {
    /// Shorthand for an `InvalidQuantity` carrying the rejected value
    pub fn invalid_quantity(quantity: impl ToString) -> Self {
        CartError::InvalidQuantity {
            quantity: quantity.to_string(),
        }
    }

    /// Returns true if this error was caused by user input and can be shown
    /// as a warning before carrying on
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CartError::InvalidQuantity { .. } | CartError::NotFound { .. }
        )
    }
}

/// Result type alias for catalog and cart operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(CartError::invalid_quantity(0).is_user_error());
        assert!(CartError::NotFound {
            product_id: "9".into()
        }
        .is_user_error());
        assert!(!CartError::Configuration("bad toml".into()).is_user_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CartError::invalid_quantity(-1).to_string(),
            "Invalid quantity: -1"
        );
        assert_eq!(
            CartError::NotFound {
                product_id: "42".into()
            }
            .to_string(),
            "Product not found: 42"
        );
    }
}
