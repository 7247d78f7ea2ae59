use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::store::FoodCatalog;
use crate::core::food::FoodRecord;
use crate::core::types::{DietaryPreference, MealSlot};

/// Benefits shown per suggested food
pub const MEAL_BENEFIT_COUNT: usize = 2;

/// A suggested food for a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSuggestion {
    pub english: String,
    pub telugu: String,
    pub benefits: Vec<String>,
}

impl From<&FoodRecord> for MealSuggestion {
    fn from(food: &FoodRecord) -> Self {
        Self {
            english: food.english().to_string(),
            telugu: food.native().to_string(),
            benefits: food.top_benefits(MEAL_BENEFIT_COUNT).to_vec(),
        }
    }
}

/// Suggestions per meal slot; every slot is present, possibly empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealPlan {
    pub preference: DietaryPreference,
    pub meals: IndexMap<MealSlot, Vec<MealSuggestion>>,
}

impl MealPlan {
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[MealSuggestion] {
        self.meals.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Hand-curated food keys for a preference and meal slot.
///
/// Dinner and snacks have no curation yet and are always empty.
#[must_use]
pub fn curated_keys(preference: DietaryPreference, slot: MealSlot) -> &'static [&'static str] {
    match (preference, slot) {
        // Low glycemic index
        (DietaryPreference::Diabetic, MealSlot::Breakfast) => &["రాగులు", "వరగు", "వోట్స్"],
        (DietaryPreference::Diabetic, MealSlot::Lunch) => &["కంది పప్పు", "పెసర పప్పు", "సామలు"],
        // High fiber, low calorie
        (DietaryPreference::WeightLoss, MealSlot::Breakfast) => &["వోట్స్", "రాగులు", "చియా సీడ్స్"],
        (DietaryPreference::WeightLoss, MealSlot::Lunch) => &["పెసర పప్పు", "క్వినోవా", "సామలు"],
        (DietaryPreference::Balanced, MealSlot::Breakfast) => &["వోట్స్", "రాగులు", "గోధుమ"],
        (DietaryPreference::Balanced, MealSlot::Lunch) => &["కంది పప్పు", "బియ్యం", "కొర్రలు"],
        (_, MealSlot::Dinner | MealSlot::Snacks) => &[],
    }
}

/// Build the meal plan for a preference by direct key lookup.
///
/// Curated keys missing from the catalog (possible with custom catalogs) are skipped.
pub fn suggest_meals(catalog: &FoodCatalog, preference: DietaryPreference) -> MealPlan {
    let meals = MealSlot::ALL
        .iter()
        .map(|&slot| {
            let suggestions = curated_keys(preference, slot)
                .iter()
                .filter_map(|key| {
                    let food = catalog.get(key);
                    if food.is_none() {
                        tracing::warn!("Curated food '{}' missing from catalog", key);
                    }
                    food
                })
                .map(MealSuggestion::from)
                .collect();
            (slot, suggestions)
        })
        .collect();

    MealPlan { preference, meals }
}

/// [`suggest_meals`] from a free-text preference tag
pub fn suggest_meals_for(catalog: &FoodCatalog, preference: &str) -> MealPlan {
    suggest_meals(catalog, DietaryPreference::parse_lenient(preference))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english(suggestions: &[MealSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.english.as_str()).collect()
    }

    #[test]
    fn test_diabetic_breakfast() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let plan = suggest_meals_for(&catalog, "diabetic");

        let breakfast = plan.slot(MealSlot::Breakfast);
        assert_eq!(
            english(breakfast),
            vec!["Finger Millet", "Proso Millet", "Oats"]
        );
        assert!(breakfast.iter().all(|s| s.benefits.len() == MEAL_BENEFIT_COUNT));
        assert_eq!(breakfast[0].benefits, vec!["High calcium", "Rich in amino acids"]);
    }

    #[test]
    fn test_weight_loss_lunch() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let plan = suggest_meals_for(&catalog, "WEIGHT_LOSS");
        assert_eq!(plan.preference, DietaryPreference::WeightLoss);
        assert_eq!(
            english(plan.slot(MealSlot::Lunch)),
            vec!["Moong Dal", "Quinoa", "Little Millet"]
        );
    }

    #[test]
    fn test_unknown_preference_is_balanced() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let plan = suggest_meals_for(&catalog, "paleo");
        assert_eq!(plan, suggest_meals(&catalog, DietaryPreference::Balanced));
        assert_eq!(
            english(plan.slot(MealSlot::Breakfast)),
            vec!["Oats", "Finger Millet", "Wheat"]
        );
        assert_eq!(
            english(plan.slot(MealSlot::Lunch)),
            vec!["Toor Dal", "Rice", "Foxtail Millet"]
        );
    }

    #[test]
    fn test_spaced_weight_loss_is_balanced() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let plan = suggest_meals_for(&catalog, "weight loss");
        assert_eq!(plan, suggest_meals(&catalog, DietaryPreference::Balanced));
    }

    #[test]
    fn test_dinner_and_snacks_present_but_empty() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let plan = suggest_meals(&catalog, DietaryPreference::Diabetic);

        let slots: Vec<MealSlot> = plan.meals.keys().copied().collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
        assert!(plan.slot(MealSlot::Dinner).is_empty());
        assert!(plan.slot(MealSlot::Snacks).is_empty());
    }

    #[test]
    fn test_plan_serializes_slots_in_order() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let plan = suggest_meals(&catalog, DietaryPreference::Balanced);
        let json = serde_json::to_string(&plan).unwrap();

        let breakfast = json.find("\"breakfast\"").unwrap();
        let snacks = json.find("\"snacks\"").unwrap();
        assert!(breakfast < snacks);
        assert!(json.contains("\"preference\":\"balanced\""));
    }

    #[test]
    fn test_every_curated_key_exists() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        for preference in [
            DietaryPreference::Balanced,
            DietaryPreference::Diabetic,
            DietaryPreference::WeightLoss,
        ] {
            for slot in MealSlot::ALL {
                for key in curated_keys(preference, slot) {
                    assert!(catalog.get(key).is_some(), "{key}");
                }
            }
        }
    }
}
