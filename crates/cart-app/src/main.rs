//! # Counter-Cart
//!
//! A small terminal shopping cart.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a catalog file
//! export CART_CATALOG_PATH=config/products.toml
//!
//! # Shop interactively
//! counter-cart
//!
//! # Just list the products
//! counter-cart products --json
//! ```

use anyhow::Context;
use cart_app::{
    cli::{Args, Commands},
    ui, view, AppConfig, AppState,
};
use cart_core::Product;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The UI owns stdout, so keep logs quiet unless asked
    let default_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let mut config = AppConfig::from_env();
    if let Some(path) = &args.catalog {
        config = config.with_catalog_path(path);
    }
    info!("Environment: {}", config.environment);

    let state = AppState::new(config).context("Failed to load product catalog")?;
    info!("Products loaded: {}", state.catalog.len());

    match args.subcommand() {
        Commands::Products { json: true } => {
            let products: Vec<&Product> =
                state.catalog.list_products().iter().map(|p| p.as_ref()).collect();
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        Commands::Products { json: false } => {
            println!("{}", view::product_table(&state.catalog));
        }
        Commands::Shop => {
            let title = state.config.title.clone();
            let mut storefront = state.into_storefront();
            ui::run(&mut storefront, &title)?;
            info!(
                "Session ended with {} items, {}",
                storefront.cart().item_count(),
                view::total_label(storefront.cart())
            );
        }
    }

    Ok(())
}
