use clap::Args;

use crate::catalog::store::FoodCatalog;
use crate::cli::{tsv_list, OutputFormat};
use crate::views::category::foods_in_category;

#[derive(Args)]
pub struct CategoryArgs {
    /// Category name (Millet, Pulse, Grain, Spice, Seeds); case-insensitive
    #[arg(required = true)]
    pub name: String,
}

/// Execute category subcommand
///
/// An unknown category is not an error; it simply lists nothing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &CategoryArgs, catalog: &FoodCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let entries = foods_in_category(catalog, &args.name);

    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No foods found in category: {}", args.name);
                println!("Available categories: {}", catalog.categories().join(", "));
                return Ok(());
            }
            println!("{} Foods ({})\n", args.name.trim().to_uppercase(), entries.len());
            for entry in &entries {
                println!("- {} ({}) - {}", entry.english, entry.telugu, entry.hindi);
                println!("  Benefits: {}", entry.benefits.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Tsv => {
            println!("telugu\tenglish\thindi\tbenefits");
            for entry in &entries {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.telugu,
                    entry.english,
                    entry.hindi,
                    tsv_list(&entry.benefits)
                );
            }
        }
    }

    Ok(())
}
