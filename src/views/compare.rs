use serde::Serialize;

use crate::core::food::Nutrition;
use crate::matching::engine::Resolver;

/// Nutrition of one compared food
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionComparison {
    /// English name of the first match
    pub name: String,
    pub nutrition: Nutrition,
}

/// Resolve each query and keep its first match, in input order.
///
/// Queries that resolve to nothing are skipped, so the output can be shorter
/// than the input.
pub fn compare<S: AsRef<str>>(resolver: &Resolver<'_>, queries: &[S]) -> Vec<NutritionComparison> {
    queries
        .iter()
        .filter_map(|query| {
            let food = resolver.first_match(query.as_ref());
            if food.is_none() {
                tracing::debug!("Skipping '{}' in comparison: no match", query.as_ref());
            }
            food
        })
        .map(|food| NutritionComparison {
            name: food.english().to_string(),
            nutrition: food.nutrition.clone(),
        })
        .collect()
}

/// Union of nutrient names across a comparison, in first-seen order.
///
/// Used as the column set when rendering a comparison table.
pub fn nutrient_columns(comparison: &[NutritionComparison]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for entry in comparison {
        for nutrient in entry.nutrition.keys() {
            if !columns.contains(&nutrient.as_str()) {
                columns.push(nutrient);
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::FoodCatalog;

    #[test]
    fn test_compare_skips_unresolved_and_keeps_order() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let resolver = Resolver::new(&catalog);

        let result = compare(&resolver, &["Ragi", "NoSuchFoodXYZ", "Wheat"]);
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Finger Millet", "Wheat"]);
        assert_eq!(result[0].nutrition["calcium"], "344mg");
    }

    #[test]
    fn test_compare_keeps_only_first_match() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let resolver = Resolver::new(&catalog);

        // "millet" matches six foods; only the first is compared
        let result = compare(&resolver, &["millet"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Little Millet");
    }

    #[test]
    fn test_compare_nothing_resolves() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let resolver = Resolver::new(&catalog);
        assert!(compare(&resolver, &["", "pizza"]).is_empty());
    }

    #[test]
    fn test_nutrient_columns_union_in_first_seen_order() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let resolver = Resolver::new(&catalog);

        let result = compare(&resolver, &["ragi", "oats"]);
        assert_eq!(
            nutrient_columns(&result),
            vec!["protein", "fiber", "calcium", "iron", "manganese", "phosphorus"]
        );
    }
}
