use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "counter-cart")]
#[command(about = "A small terminal shopping cart")]
#[command(version)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Product catalog file (TOML); overrides CART_CATALOG_PATH
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive storefront (default)
    Shop,
    /// Print the product catalog and exit
    Products {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Args {
    /// The subcommand to run, defaulting to the storefront
    pub fn subcommand(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Shop)
    }
}
