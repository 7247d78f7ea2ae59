use serde::Serialize;

use crate::catalog::store::FoodCatalog;
use crate::core::food::FoodRecord;

/// Benefits shown per food when browsing a category
pub const CATEGORY_BENEFIT_COUNT: usize = 3;

/// A food listed under a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub telugu: String,
    pub english: String,
    pub hindi: String,
    pub benefits: Vec<String>,
}

impl From<&FoodRecord> for CategoryEntry {
    fn from(food: &FoodRecord) -> Self {
        Self {
            telugu: food.native().to_string(),
            english: food.english().to_string(),
            hindi: food.hindi().to_string(),
            benefits: food.top_benefits(CATEGORY_BENEFIT_COUNT).to_vec(),
        }
    }
}

/// Every food whose category equals `category`, ignoring case, in catalog order
pub fn foods_in_category(catalog: &FoodCatalog, category: &str) -> Vec<CategoryEntry> {
    let category = category.trim();
    catalog
        .iter()
        .filter(|food| food.in_category(category))
        .map(CategoryEntry::from)
        .collect()
}
