//! Interactive numbered menu over the same views as the subcommands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::catalog::store::FoodCatalog;
use crate::matching::engine::{Lookup, Resolver};
use crate::utils::validation::split_food_list;
use crate::views::category::foods_in_category;
use crate::views::compare::compare;
use crate::views::info::food_info;
use crate::views::labels::render_labels;
use crate::views::meals::suggest_meals_for;

/// File the export option writes to when no name is entered
pub const DEFAULT_EXPORT_FILE: &str = "food_database.json";

const MENU: &str = "\nChoose an option:
1. Search for a food item
2. Get foods by category
3. Compare nutrition
4. Get meal suggestions
5. Create retail labels
6. Export database
7. Exit";

/// Run the menu on stdin and stdout
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run(catalog: &FoodCatalog) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(catalog, stdin.lock(), stdout.lock())
}

/// Run the menu until option 7 or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_with<R: BufRead, W: Write>(
    catalog: &FoodCatalog,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    let resolver = Resolver::new(catalog);

    writeln!(out, "Multilingual Food Lookup")?;
    writeln!(out, "{}", "=".repeat(60))?;

    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "\nEnter your choice (1-7): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(query) = prompt(&mut input, &mut out, "Enter food name (in any language): ")?
                else {
                    break;
                };
                match food_info(&resolver, &query) {
                    Lookup::Found(info) => {
                        for item in info {
                            writeln!(out, "\n{} ({})", item.english, item.telugu)?;
                            writeln!(out, "   Hindi: {}", item.hindi)?;
                            writeln!(out, "   Category: {} | Type: {}", item.category, item.food_type)?;
                            writeln!(
                                out,
                                "   Benefits: {}",
                                item.health_benefits
                                    .iter()
                                    .take(3)
                                    .cloned()
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            )?;
                        }
                    }
                    Lookup::NotFound => {
                        writeln!(out, "Food '{}' not found in database", query)?;
                    }
                    Lookup::InvalidInput(err) => writeln!(out, "{err}")?,
                }
            }
            "2" => {
                let Some(category) =
                    prompt(&mut input, &mut out, "Enter category (Millet/Pulse/Grain/Spice/Seeds): ")?
                else {
                    break;
                };
                let entries = foods_in_category(catalog, &category);
                if entries.is_empty() {
                    writeln!(out, "No foods found in category: {category}")?;
                } else {
                    writeln!(out, "\n{} Foods:", category.to_uppercase())?;
                    for entry in entries {
                        writeln!(out, "- {} ({}) - {}", entry.english, entry.telugu, entry.hindi)?;
                        writeln!(out, "  Benefits: {}", entry.benefits.join(", "))?;
                    }
                }
            }
            "3" => {
                let Some(list) = prompt(&mut input, &mut out, "Enter food names separated by commas: ")?
                else {
                    break;
                };
                writeln!(out, "\nNutrition Comparison:")?;
                for entry in compare(&resolver, &split_food_list(&list)) {
                    let nutrition: Vec<String> = entry
                        .nutrition
                        .iter()
                        .map(|(nutrient, amount)| format!("{nutrient} {amount}"))
                        .collect();
                    writeln!(out, "- {}: {}", entry.name, nutrition.join(", "))?;
                }
            }
            "4" => {
                let Some(preference) = prompt(
                    &mut input,
                    &mut out,
                    "Enter dietary preference (balanced/diabetic/weight_loss): ",
                )?
                else {
                    break;
                };
                let plan = suggest_meals_for(catalog, &preference);
                writeln!(out, "\nMeal Suggestions for {} Diet:", plan.preference)?;
                for (slot, suggestions) in &plan.meals {
                    if suggestions.is_empty() {
                        continue;
                    }
                    writeln!(out, "\n{slot}:")?;
                    for s in suggestions {
                        writeln!(out, "- {} ({})", s.english, s.telugu)?;
                        writeln!(out, "  Benefits: {}", s.benefits.join(", "))?;
                    }
                }
            }
            "5" => {
                let Some(list) =
                    prompt(&mut input, &mut out, "Enter food names for labels (comma-separated): ")?
                else {
                    break;
                };
                writeln!(out, "\nRetail Labels:")?;
                for label in render_labels(&resolver, &split_food_list(&list)) {
                    writeln!(out, "{label}")?;
                }
            }
            "6" => {
                let Some(filename) = prompt(
                    &mut input,
                    &mut out,
                    &format!("Enter filename (default: {DEFAULT_EXPORT_FILE}): "),
                )?
                else {
                    break;
                };
                let filename = if filename.is_empty() {
                    DEFAULT_EXPORT_FILE
                } else {
                    filename.as_str()
                };
                match catalog.export_to_file(Path::new(filename)) {
                    Ok(()) => writeln!(out, "Database exported to {filename}")?,
                    Err(e) => writeln!(out, "Export failed: {e}")?,
                }
            }
            "7" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }

    out.flush()?;
    Ok(())
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let mut out = Vec::new();
        run_with(&catalog, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_search_then_exit() {
        let out = run_script("1\nragulu\n7\n");
        assert!(out.contains("Finger Millet (రాగులు)"));
        assert!(out.contains("Hindi: रागी"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_search_not_found_and_blank() {
        let out = run_script("1\npizza\n1\n   \n7\n");
        assert!(out.contains("Food 'pizza' not found in database"));
        assert!(out.contains("Please enter a valid food name"));
    }

    #[test]
    fn test_category_and_compare() {
        let out = run_script("2\nseeds\n3\nRagi, NoSuchFoodXYZ, Wheat\n7\n");
        assert!(out.contains("SEEDS Foods:"));
        assert!(out.contains("- Sesame Seeds (నువ్వులు)"));
        assert!(out.contains("- Finger Millet: protein 7.3g"));
        assert!(out.contains("- Wheat: protein 11.8g"));
        assert!(!out.contains("NoSuchFoodXYZ:"));
    }

    #[test]
    fn test_meals_and_labels() {
        let out = run_script("4\ndiabetic\n5\noats\n7\n");
        assert!(out.contains("Meal Suggestions for Diabetic Diet:"));
        assert!(out.contains("- Proso Millet (వరగు)"));
        assert!(!out.contains("Dinner:"));
        assert!(out.contains("╔"));
        assert!(out.contains("Protein: 16.9g"));
    }

    #[test]
    fn test_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let out = run_script(&format!("6\n{}\n7\n", path.display()));

        assert!(out.contains("Database exported to"));
        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"సామలు\""));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let out = run_script("9\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(!out.contains("Goodbye!"));
    }
}
