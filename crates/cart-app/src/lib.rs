//! # cart-app
//!
//! Terminal storefront for counter-cart.
//!
//! This crate provides:
//! - `AppConfig` / `AppState`: environment config and catalog loading
//! - `Storefront`: the add and remove actions over a catalog and cart
//! - `view`: product table, cart table and total label
//! - `ui`: the interactive `dialoguer` loop
//! - `cli`: command-line arguments
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `counter-cart` / `counter-cart shop` | Interactive storefront |
//! | `counter-cart products [--json]` | Print the catalog |

pub mod cli;
pub mod state;
pub mod storefront;
pub mod ui;
pub mod view;

pub use state::{AppConfig, AppState};
pub use storefront::{Storefront, StorefrontError};
