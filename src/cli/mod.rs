//! Command-line interface for food-resolver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Full information for every food a query resolves to
//! - **category**: List the foods in a category
//! - **compare**: Side-by-side nutrition of several foods
//! - **meals**: Meal suggestions for a dietary preference
//! - **labels**: Printable retail labels
//! - **catalog**: List, show, or export the catalog
//! - **menu**: Interactive numbered menu
//! - **serve**: Start the web interface
//!
//! ## Usage
//!
//! ```text
//! # Look up a food in any script
//! food-resolver search రాగులు
//! food-resolver search ragi --format json
//!
//! # Compare nutrition
//! food-resolver compare "Ragi, Wheat, Oats"
//!
//! # Meal ideas for diabetics
//! food-resolver meals --preference diabetic
//!
//! # Export the catalog
//! food-resolver catalog export food_database.json
//!
//! # Start web UI
//! food-resolver serve --port 8080 --open
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::FoodCatalog;

pub mod catalog;
pub mod category;
pub mod compare;
pub mod labels;
pub mod meals;
pub mod menu;
pub mod search;

#[derive(Parser)]
#[command(name = "food-resolver")]
#[command(version)]
#[command(about = "Look up foods by name in any Indian script or romanized spelling")]
#[command(
    long_about = "food-resolver maps food names typed in English, Hindi, Telugu, Tamil or Kannada, or a romanized spelling like \"ragulu\", to a curated catalog of kitchen staples.\n\nFor every match it provides:\n- Translations in each supported language\n- Category and type\n- Health benefits and nutrition per 100g"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to custom catalog file (defaults to the embedded catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a food by name in any language
    Search(search::SearchArgs),

    /// List all foods in a category
    Category(category::CategoryArgs),

    /// Compare nutrition across foods
    Compare(compare::CompareArgs),

    /// Suggest meals for a dietary preference
    Meals(meals::MealsArgs),

    /// Print retail labels for foods
    Labels(labels::LabelsArgs),

    /// Inspect or export the food catalog
    Catalog(catalog::CatalogArgs),

    /// Interactive menu
    Menu,

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the catalog named on the command line, or the embedded one.
///
/// The catalog lives for the rest of the process so the resolver and the
/// web server can borrow it freely.
///
/// # Errors
///
/// Returns an error if the custom catalog cannot be read or is invalid.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<&'static FoodCatalog> {
    match path {
        Some(path) => {
            let catalog = FoodCatalog::load_from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
            tracing::info!(
                "Loaded catalog from {} with {} foods",
                path.display(),
                catalog.len()
            );
            Ok(Box::leak(Box::new(catalog)))
        }
        None => Ok(FoodCatalog::shared()?),
    }
}

/// Join strings for a single TSV cell
pub(crate) fn tsv_list(items: &[String]) -> String {
    items.join("; ")
}
