use clap::Args;

use crate::catalog::store::FoodCatalog;
use crate::cli::OutputFormat;
use crate::core::food::MISSING_NAME;
use crate::matching::engine::Resolver;
use crate::utils::validation::{expand_food_args, validate_batch};
use crate::views::compare::{compare, nutrient_columns, NutritionComparison};

#[derive(Args)]
pub struct CompareArgs {
    /// Food names; each argument may also be a comma-separated list
    #[arg(required = true, num_args = 1..)]
    pub foods: Vec<String>,
}

/// Execute compare subcommand
///
/// Names that resolve to nothing are skipped.
///
/// # Errors
///
/// Returns an error if no food name was given.
pub fn run(args: &CompareArgs, catalog: &FoodCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let names = expand_food_args(&args.foods);
    validate_batch(&names)?;

    let resolver = Resolver::new(catalog);
    let comparison = compare(&resolver, &names);
    tracing::debug!(
        "Compared {} of {} requested foods",
        comparison.len(),
        names.len()
    );

    match format {
        OutputFormat::Text => print_text_comparison(&comparison),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Tsv => print_tsv_comparison(&comparison),
    }

    Ok(())
}

fn print_text_comparison(comparison: &[NutritionComparison]) {
    if comparison.is_empty() {
        println!("None of the foods were found");
        return;
    }

    println!("Nutrition Comparison (per 100g)");
    println!("{}", "=".repeat(60));

    let name_width = comparison
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let columns = nutrient_columns(comparison);

    print!("{:<name_w$}", "Food", name_w = name_width);
    for column in &columns {
        print!(" {column:>10}");
    }
    println!();
    println!("{}", "-".repeat(name_width + columns.len() * 11));

    for entry in comparison {
        print!("{:<name_w$}", entry.name, name_w = name_width);
        for column in &columns {
            let amount = entry
                .nutrition
                .get(*column)
                .map_or(MISSING_NAME, String::as_str);
            print!(" {amount:>10}");
        }
        println!();
    }
}

fn print_tsv_comparison(comparison: &[NutritionComparison]) {
    let columns = nutrient_columns(comparison);
    println!("name\t{}", columns.join("\t"));
    for entry in comparison {
        let cells: Vec<&str> = columns
            .iter()
            .map(|column| entry.nutrition.get(*column).map_or("", String::as_str))
            .collect();
        println!("{}\t{}", entry.name, cells.join("\t"));
    }
}
