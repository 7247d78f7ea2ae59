use clap::Args;

use crate::catalog::store::FoodCatalog;
use crate::cli::{tsv_list, OutputFormat};
use crate::views::meals::{suggest_meals_for, MealPlan};

#[derive(Args)]
pub struct MealsArgs {
    /// Dietary preference (balanced, diabetic, weight_loss); unknown values fall back to balanced
    #[arg(short, long, default_value = "balanced")]
    pub preference: String,
}

/// Execute meals subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &MealsArgs, catalog: &FoodCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let plan = suggest_meals_for(catalog, &args.preference);

    match format {
        OutputFormat::Text => print_text_plan(&plan),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Tsv => {
            println!("meal\tenglish\ttelugu\tbenefits");
            for (slot, suggestions) in &plan.meals {
                for s in suggestions {
                    println!(
                        "{}\t{}\t{}\t{}",
                        slot.as_str(),
                        s.english,
                        s.telugu,
                        tsv_list(&s.benefits)
                    );
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn print_text_plan(plan: &MealPlan) {
    println!("Meal Suggestions ({})", plan.preference);
    for (slot, suggestions) in &plan.meals {
        if suggestions.is_empty() {
            continue;
        }
        println!("\n{slot}:");
        for s in suggestions {
            println!("- {} ({})", s.english, s.telugu);
            println!("  Benefits: {}", s.benefits.join(", "));
        }
    }
}
