use clap::Args;

use crate::catalog::store::FoodCatalog;
use crate::cli::{tsv_list, OutputFormat};
use crate::matching::engine::{Lookup, Resolver};
use crate::views::info::{food_info, FoodInfo};

#[derive(Args)]
pub struct SearchArgs {
    /// Food name in any language; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the query is invalid or resolves to nothing.
pub fn run(args: &SearchArgs, catalog: &FoodCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let query = args.query.join(" ");
    let resolver = Resolver::new(catalog);

    let info = match food_info(&resolver, &query) {
        Lookup::Found(info) => info,
        Lookup::NotFound => anyhow::bail!("Food '{}' not found in database", query.trim()),
        Lookup::InvalidInput(err) => anyhow::bail!("{}", err),
    };

    match format {
        OutputFormat::Text => print_text_results(&info),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Tsv => print_tsv_results(&info),
    }

    Ok(())
}

fn print_text_results(info: &[FoodInfo]) {
    for (i, item) in info.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({})", item.english, item.telugu);
        println!("  Hindi:    {}", item.hindi);
        println!("  Tamil:    {}", item.tamil);
        println!("  Kannada:  {}", item.kannada);
        println!("  Category: {} | Type: {}", item.category, item.food_type);
        println!("  Benefits: {}", item.health_benefits.join(", "));

        let nutrition: Vec<String> = item
            .nutrition_per_100g
            .iter()
            .map(|(nutrient, amount)| format!("{nutrient} {amount}"))
            .collect();
        println!("  Nutrition (per 100g): {}", nutrition.join(", "));
        println!("  Retail:   {}", item.retail_display);
        println!("  Matched by: {}", item.matched_by);
    }
}

fn print_tsv_results(info: &[FoodInfo]) {
    println!("telugu\tenglish\thindi\ttamil\tkannada\tcategory\ttype\tbenefits\tmatched_by");
    for item in info {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            item.telugu,
            item.english,
            item.hindi,
            item.tamil,
            item.kannada,
            item.category,
            item.food_type,
            tsv_list(&item.health_benefits),
            item.matched_by
        );
    }
}
