//! # Product Types
//!
//! Product and price types for counter-cart.
//! Prices are held in paise and displayed in rupees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Currency symbol used for display
pub const CURRENCY_SYMBOL: &str = "₹";

/// Paise per rupee
const MINOR_UNITS: u64 = 100;

/// Stable product identifier, assigned by whoever builds the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Non-negative price in the smallest currency unit (paise)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in paise
    pub amount: u64,
}

impl Price {
    /// Zero price
    pub const ZERO: Price = Price { amount: 0 };

    /// Create a price from whole rupees
    pub fn rupees(rupees: u64) -> Self {
        Self {
            amount: rupees.saturating_mul(MINOR_UNITS),
        }
    }

    /// Create a price from paise
    pub fn from_paise(amount: u64) -> Self {
        Self { amount }
    }

    /// Price of `quantity` units at this unit price
    pub fn times(self, quantity: u32) -> Self {
        Self {
            amount: self.amount.saturating_mul(u64::from(quantity)),
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            amount: self.amount.saturating_add(rhs.amount),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

/// Formats as `₹100` for whole rupees, `₹12.50` otherwise
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = self.amount / MINOR_UNITS;
        let paise = self.amount % MINOR_UNITS;
        if paise == 0 {
            write!(f, "{}{}", CURRENCY_SYMBOL, rupees)
        } else {
            write!(f, "{}{}.{:02}", CURRENCY_SYMBOL, rupees, paise)
        }
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Price,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
