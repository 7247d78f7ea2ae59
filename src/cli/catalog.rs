use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::export::write_atomic;
use crate::catalog::store::FoodCatalog;
use crate::cli::OutputFormat;
use crate::core::types::Language;
use crate::matching::engine::Resolver;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all foods in the catalog
    List {
        /// Filter by category (e.g., "Millet")
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the catalog record of a food
    Show {
        /// Food key, or any query that resolves to a food
        #[arg(required = true)]
        query: String,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Write the loadable catalog format (foods plus phonetic aliases)
        /// instead of the keyed export
        #[arg(long)]
        full: bool,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if a food cannot be found or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: CatalogArgs,
    catalog: &FoodCatalog,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { category } => {
            run_list(catalog, category.as_deref(), format, verbose)
        }
        CatalogCommands::Show { query } => run_show(catalog, &query, format),
        CatalogCommands::Export { output, full } => run_export(catalog, output, full),
    }
}

fn run_list(
    catalog: &FoodCatalog,
    category_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        eprintln!(
            "Loaded catalog with {} foods and {} phonetic aliases",
            catalog.len(),
            catalog.aliases().len()
        );
    }

    let filtered: Vec<_> = catalog
        .iter()
        .filter(|f| category_filter.map_or(true, |c| f.in_category(c.trim())))
        .collect();

    match format {
        OutputFormat::Text => {
            // Column widths in chars; native scripts are multi-byte
            let key_width = filtered
                .iter()
                .map(|f| f.native().chars().count())
                .max()
                .unwrap_or(3)
                .max(3);
            let english_width = filtered
                .iter()
                .map(|f| f.english().chars().count())
                .max()
                .unwrap_or(7)
                .max(7);
            let category_width = filtered
                .iter()
                .map(|f| f.category.chars().count())
                .max()
                .unwrap_or(8)
                .max(8);

            let total_width = key_width + english_width + category_width + 20 + 3;

            println!("Food Catalog ({} foods)\n", filtered.len());
            println!(
                "{:<key_w$} {:<en_w$} {:<cat_w$} {}",
                "Key",
                "English",
                "Category",
                "Type",
                key_w = key_width,
                en_w = english_width,
                cat_w = category_width
            );
            println!("{}", "-".repeat(total_width));

            for f in &filtered {
                println!(
                    "{:<key_w$} {:<en_w$} {:<cat_w$} {}",
                    f.native(),
                    f.english(),
                    f.category,
                    f.food_type,
                    key_w = key_width,
                    en_w = english_width,
                    cat_w = category_width
                );
                if verbose {
                    let aliases: Vec<&str> = catalog
                        .aliases()
                        .iter()
                        .filter(|(_, key)| key.as_str() == f.native())
                        .map(|(alias, _)| alias.as_str())
                        .collect();
                    if !aliases.is_empty() {
                        println!("  └─ Aliases: {}", aliases.join(", "));
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("key\tenglish\thindi\ttamil\tkannada\tcategory\ttype");
            for f in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    f.native(),
                    f.english(),
                    f.hindi(),
                    f.names.tamil.as_deref().unwrap_or(""),
                    f.names.kannada.as_deref().unwrap_or(""),
                    f.category,
                    f.food_type
                );
            }
        }
    }

    Ok(())
}

fn run_show(catalog: &FoodCatalog, query: &str, format: OutputFormat) -> anyhow::Result<()> {
    // Exact key first, then the resolver's first match
    let food = catalog
        .get(query.trim())
        .or_else(|| Resolver::new(catalog).first_match(query))
        .ok_or_else(|| anyhow::anyhow!("Food '{}' not found", query.trim()))?;

    match format {
        OutputFormat::Text => {
            println!("Food: {}\n", food.english());
            println!("Key:      {}", food.key);
            println!("Hindi:    {}", food.hindi());
            println!("Tamil:    {}", food.display_name(Language::Tamil));
            println!("Kannada:  {}", food.display_name(Language::Kannada));
            println!("Category: {}", food.category);
            println!("Type:     {}", food.food_type);

            let aliases: Vec<&str> = catalog
                .aliases()
                .iter()
                .filter(|(_, target)| target.as_str() == food.native())
                .map(|(alias, _)| alias.as_str())
                .collect();
            if !aliases.is_empty() {
                println!("Aliases:  {}", aliases.join(", "));
            }

            println!("\nBenefits:");
            for benefit in &food.benefits {
                println!("  - {benefit}");
            }

            println!("\nNutrition (per 100g):");
            println!("{:<15} {:>10}", "Nutrient", "Amount");
            println!("{}", "-".repeat(26));
            for (nutrient, amount) in &food.nutrition {
                println!("{nutrient:<15} {amount:>10}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(food)?);
        }
        OutputFormat::Tsv => {
            println!("nutrient\tamount");
            for (nutrient, amount) in &food.nutrition {
                println!("{nutrient}\t{amount}");
            }
        }
    }

    Ok(())
}

fn run_export(catalog: &FoodCatalog, output: PathBuf, full: bool) -> anyhow::Result<()> {
    if full {
        write_atomic(&output, &catalog.to_json()?)?;
    } else {
        catalog.export_to_file(&output)?;
    }

    println!("Exported {} foods to {}", catalog.len(), output.display());

    Ok(())
}
