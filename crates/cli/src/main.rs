//! Hobnail CLI - cart and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the saved cart
//! hobnail cart show
//!
//! # Add two units of product 1 in brown, size 10
//! hobnail cart add 1 -q 2 --color Brown --size 10
//!
//! # Change or remove a line
//! hobnail cart set 1 3
//! hobnail cart remove 1
//! hobnail cart clear
//!
//! # Browse the catalog
//! hobnail catalog list
//! hobnail catalog list "Black Friday"
//! ```
//!
//! The cart is read from and written to the same data directory the
//! storefront uses (`HOBNAIL_DATA_DIR`, or `--data-dir`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hobnail_core::{ProductId, Selection};
use hobnail_storefront::cart::{CartStore, FileSlot};
use hobnail_storefront::catalog::Catalog;
use hobnail_storefront::config::StorefrontConfig;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "hobnail")]
#[command(author, version, about = "Hobnail cart and catalog tools")]
struct Cli {
    /// Directory holding the saved cart (overrides `HOBNAIL_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog JSON file (overrides `HOBNAIL_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the saved cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add a catalog product
    Add {
        /// Catalog product id
        product_id: ProductId,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Chosen color
        #[arg(long)]
        color: Option<String>,

        /// Chosen size
        #[arg(long)]
        size: Option<String>,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product id
        product_id: ProductId,
    },
    /// Set the quantity of a cart line (0 removes it)
    Set {
        /// Catalog product id
        product_id: ProductId,

        /// New quantity
        quantity: u32,
    },
    /// Remove every line
    Clear,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally for a category or promotion
    List {
        /// Category or promotion, e.g. "Featured" or "work-boots-and-shoes"
        selector: Option<String>,
    },
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    let catalog_path = cli.catalog.or(config.catalog_path);
    let catalog = Catalog::load_or_demo(catalog_path.as_deref())?;

    let lines = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { selector } => {
                commands::catalog::list(&catalog, selector.as_deref())
            }
        },
        Commands::Cart { action } => {
            let mut store = CartStore::open(FileSlot::in_dir(&data_dir));
            match action {
                CartAction::Show => {}
                CartAction::Add {
                    product_id,
                    quantity,
                    color,
                    size,
                } => {
                    let selection = Selection { color, size };
                    commands::cart::add(&mut store, &catalog, product_id, quantity, selection)?;
                }
                CartAction::Remove { product_id } => {
                    commands::cart::remove(&mut store, product_id);
                }
                CartAction::Set {
                    product_id,
                    quantity,
                } => commands::cart::set(&mut store, &catalog, product_id, quantity)?,
                CartAction::Clear => store.clear(),
            }
            commands::cart::render(&store)
        }
    };

    for line in lines {
        tracing::info!("{line}");
    }
    Ok(())
}
