//! icanmake3d CLI - Catalog inspection and validation tools.
//!
//! # Usage
//!
//! ```bash
//! # List the store, cheapest first
//! im3d-cli catalog list --sort price-low
//!
//! # List one category of a catalog file
//! im3d-cli catalog list --category cars --file catalog.yaml
//!
//! # Show one product
//! im3d-cli catalog show robot-warrior
//!
//! # Validate a catalog file before deploying it
//! im3d-cli catalog validate catalog.yaml
//!
//! # Export the built-in catalog as a starting point for edits
//! im3d-cli catalog export catalog.yaml
//! ```
//!
//! Catalog files ending in `.json` are read and written as JSON; anything
//! else is YAML. The storefront's `STOREFRONT_CATALOG_PATH` expects JSON.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use icanmake3d_core::SortOrder;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "im3d-cli")]
#[command(author, version, about = "icanmake3d CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and validate catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List items, optionally filtered by category and sorted
    List {
        /// Only list items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order (`newest`, `price-low`, `price-high`)
        #[arg(short, long, default_value = "newest")]
        sort: SortOrder,

        /// Catalog file (defaults to the built-in catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Show one item by slug
    Show {
        /// Item slug
        slug: String,

        /// Catalog file (defaults to the built-in catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List categories with item counts
    Categories {
        /// Catalog file (defaults to the built-in catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Check a catalog file for duplicate keys and invalid prices
    Validate {
        /// Catalog file to check
        path: PathBuf,
    },
    /// Write the built-in catalog to a file
    Export {
        /// Destination file
        path: PathBuf,
    },
}

fn main() {
    // Defaults to info level so command output is visible if RUST_LOG is not set
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

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                sort,
                file,
            } => commands::catalog::list(file.as_deref(), category.as_deref(), sort)?,
            CatalogAction::Show { slug, file } => {
                commands::catalog::show(file.as_deref(), &slug)?;
            }
            CatalogAction::Categories { file } => {
                commands::catalog::categories(file.as_deref())?;
            }
            CatalogAction::Validate { path } => commands::catalog::validate(&path)?,
            CatalogAction::Export { path } => commands::catalog::export(&path)?,
        },
    }
    Ok(())
}
