use serde::Serialize;

use crate::core::food::Nutrition;
use crate::core::types::Language;
use crate::matching::engine::{Lookup, MatchResult, MatchStrategy, Resolver};

/// Everything known about one resolved food
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodInfo {
    pub telugu: String,
    pub english: String,
    pub hindi: String,
    pub tamil: String,
    pub kannada: String,
    pub category: String,
    #[serde(rename = "type")]
    pub food_type: String,
    pub health_benefits: Vec<String>,
    pub nutrition_per_100g: Nutrition,
    pub retail_display: String,
    pub matched_by: MatchStrategy,
}

impl From<&MatchResult<'_>> for FoodInfo {
    fn from(m: &MatchResult<'_>) -> Self {
        let food = m.food;
        Self {
            telugu: food.native().to_string(),
            english: food.english().to_string(),
            hindi: food.hindi().to_string(),
            tamil: food.display_name(Language::Tamil).to_string(),
            kannada: food.display_name(Language::Kannada).to_string(),
            category: food.category.clone(),
            food_type: food.food_type.clone(),
            health_benefits: food.benefits.clone(),
            nutrition_per_100g: food.nutrition.clone(),
            retail_display: food.retail_display(),
            matched_by: m.strategy,
        }
    }
}

/// Full information for every food a query resolves to
pub fn food_info(resolver: &Resolver<'_>, query: &str) -> Lookup<Vec<FoodInfo>> {
    resolver
        .lookup(query)
        .map(|matches| matches.iter().map(FoodInfo::from).collect())
}
