use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{FoodKey, Language};

/// Placeholder rendered for optional names a record does not carry
pub const MISSING_NAME: &str = "N/A";

/// Nutrient name -> display quantity (e.g. `"protein" -> "7.7g"`), in catalog order.
///
/// Values are opaque display strings; no arithmetic is performed on them.
pub type Nutrition = IndexMap<String, String>;

/// Display names of a food outside its native script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodNames {
    pub english: String,

    pub hindi: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tamil: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kannada: Option<String>,
}

/// A food in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Canonical native-script name; also the native display name
    pub key: FoodKey,

    pub names: FoodNames,

    /// Open-ended category tag (Millet, Pulse, Grain, ...)
    pub category: String,

    /// Free-text subtype label (e.g. "Ancient Grain")
    #[serde(rename = "type")]
    pub food_type: String,

    /// Health benefits, most important first
    pub benefits: Vec<String>,

    /// Per-100g nutrition facts
    pub nutrition: Nutrition,
}

impl FoodRecord {
    pub fn new(
        key: impl Into<String>,
        english: impl Into<String>,
        hindi: impl Into<String>,
        category: impl Into<String>,
        food_type: impl Into<String>,
    ) -> Self {
        Self {
            key: FoodKey::new(key),
            names: FoodNames {
                english: english.into(),
                hindi: hindi.into(),
                tamil: None,
                kannada: None,
            },
            category: category.into(),
            food_type: food_type.into(),
            benefits: Vec::new(),
            nutrition: Nutrition::new(),
        }
    }

    #[must_use]
    pub fn with_tamil(mut self, tamil: impl Into<String>) -> Self {
        self.names.tamil = Some(tamil.into());
        self
    }

    #[must_use]
    pub fn with_kannada(mut self, kannada: impl Into<String>) -> Self {
        self.names.kannada = Some(kannada.into());
        self
    }

    #[must_use]
    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_nutrient(mut self, nutrient: impl Into<String>, amount: impl Into<String>) -> Self {
        self.nutrition.insert(nutrient.into(), amount.into());
        self
    }

    /// Native-script display name (identical to the key)
    #[must_use]
    pub fn native(&self) -> &str {
        self.key.as_str()
    }

    #[must_use]
    pub fn english(&self) -> &str {
        &self.names.english
    }

    #[must_use]
    pub fn hindi(&self) -> &str {
        &self.names.hindi
    }

    /// Name in the given language, if the record carries one
    #[must_use]
    pub fn name(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => Some(&self.names.english),
            Language::Hindi => Some(&self.names.hindi),
            Language::Tamil => self.names.tamil.as_deref(),
            Language::Kannada => self.names.kannada.as_deref(),
            Language::Native => Some(self.key.as_str()),
        }
    }

    /// Name in the given language, or [`MISSING_NAME`]
    #[must_use]
    pub fn display_name(&self, language: Language) -> &str {
        self.name(language).unwrap_or(MISSING_NAME)
    }

    /// Shelf label text: `"{english} - {hindi} - {native}"`
    #[must_use]
    pub fn retail_display(&self) -> String {
        format!(
            "{} - {} - {}",
            self.names.english,
            self.names.hindi,
            self.native()
        )
    }

    /// First `n` benefits (fewer if the record has fewer)
    #[must_use]
    pub fn top_benefits(&self, n: usize) -> &[String] {
        &self.benefits[..n.min(self.benefits.len())]
    }

    #[must_use]
    pub fn nutrient(&self, nutrient: &str) -> Option<&str> {
        self.nutrition.get(nutrient).map(String::as_str)
    }

    /// Case-insensitive category comparison
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Check the minimum field set every record must carry.
    ///
    /// # Errors
    ///
    /// Returns a description of the first missing field.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("key", self.key.as_str()),
            ("english", self.names.english.as_str()),
            ("hindi", self.names.hindi.as_str()),
            ("category", self.category.as_str()),
            ("type", self.food_type.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("food '{}' has an empty '{field}'", self.key));
            }
        }
        if self.benefits.is_empty() {
            return Err(format!("food '{}' has no benefits", self.key));
        }
        if self.nutrition.is_empty() {
            return Err(format!("food '{}' has no nutrition entries", self.key));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finger_millet() -> FoodRecord {
        FoodRecord::new("రాగులు", "Finger Millet", "रागी", "Millet", "Ancient Grain")
            .with_tamil("கேழ்வரகு")
            .with_benefits(["High calcium", "Rich in amino acids", "Good for bones"])
            .with_nutrient("protein", "7.3g")
            .with_nutrient("fiber", "3.6g")
    }

    #[test]
    fn test_retail_display() {
        assert_eq!(
            finger_millet().retail_display(),
            "Finger Millet - रागी - రాగులు"
        );
    }

    #[test]
    fn test_missing_optional_name_uses_placeholder() {
        let food = finger_millet();
        assert_eq!(food.display_name(Language::Tamil), "கேழ்வரகு");
        assert_eq!(food.display_name(Language::Kannada), MISSING_NAME);
        assert_eq!(food.display_name(Language::Native), "రాగులు");
    }

    #[test]
    fn test_top_benefits_caps_at_available() {
        let food = finger_millet();
        assert_eq!(food.top_benefits(2).len(), 2);
        assert_eq!(food.top_benefits(10).len(), 3);
        assert_eq!(food.top_benefits(1)[0], "High calcium");
    }

    #[test]
    fn test_nutrition_keeps_insertion_order() {
        let food = finger_millet().with_nutrient("calcium", "344mg");
        let keys: Vec<&str> = food.nutrition.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["protein", "fiber", "calcium"]);
        assert_eq!(food.nutrient("calcium"), Some("344mg"));
        assert_eq!(food.nutrient("zinc"), None);
    }

    #[test]
    fn test_in_category_ignores_case() {
        let food = finger_millet();
        assert!(food.in_category("millet"));
        assert!(food.in_category("MILLET"));
        assert!(!food.in_category("Pulse"));
    }

    #[test]
    fn test_validate_requires_benefits_and_nutrition() {
        assert!(finger_millet().validate().is_ok());

        let bare = FoodRecord::new("x", "X", "x", "Grain", "Cereal");
        assert!(bare.validate().unwrap_err().contains("benefits"));

        let no_nutrition = bare.with_benefits(["Energy source"]);
        assert!(no_nutrition.validate().unwrap_err().contains("nutrition"));
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let json = serde_json::to_value(finger_millet()).unwrap();
        assert_eq!(json["type"], "Ancient Grain");
        assert!(json["names"].get("kannada").is_none());
    }
}
