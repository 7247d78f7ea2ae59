use clap::Args;

use crate::catalog::store::FoodCatalog;
use crate::cli::OutputFormat;
use crate::matching::engine::Resolver;
use crate::utils::validation::{expand_food_args, validate_batch};
use crate::views::labels::render_labels;

#[derive(Args)]
pub struct LabelsArgs {
    /// Food names; each argument may also be a comma-separated list
    #[arg(required = true, num_args = 1..)]
    pub foods: Vec<String>,
}

/// Execute labels subcommand
///
/// Labels are plain text, so the TSV format prints them the same as text.
///
/// # Errors
///
/// Returns an error if no food name was given.
pub fn run(args: &LabelsArgs, catalog: &FoodCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let names = expand_food_args(&args.foods);
    validate_batch(&names)?;

    let resolver = Resolver::new(catalog);
    let labels = render_labels(&resolver, &names);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&labels)?),
        OutputFormat::Text | OutputFormat::Tsv => {
            if labels.is_empty() {
                println!("None of the foods were found");
            }
            for label in &labels {
                println!("{label}\n");
            }
        }
    }

    Ok(())
}
