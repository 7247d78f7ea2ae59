use serde::{Deserialize, Serialize};

/// Canonical identifier of a food: its native-script (Telugu) name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodKey(pub String);

impl FoodKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FoodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for FoodKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Languages a food name can be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Kannada,
    /// The catalog's native script (Telugu)
    Native,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Hindi => write!(f, "Hindi"),
            Self::Tamil => write!(f, "Tamil"),
            Self::Kannada => write!(f, "Kannada"),
            Self::Native => write!(f, "Telugu"),
        }
    }
}

/// Dietary preference driving meal suggestions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    #[default]
    Balanced,
    Diabetic,
    WeightLoss,
}

impl DietaryPreference {
    pub const ALL: [Self; 3] = [Self::Balanced, Self::Diabetic, Self::WeightLoss];

    /// Parse a free-text preference tag.
    ///
    /// Matching is case-insensitive against the tags `balanced`, `diabetic`
    /// and `weight_loss`. Anything else falls back to `Balanced`.
    #[must_use]
    pub fn parse_lenient(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(Self::Balanced)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Diabetic => "diabetic",
            Self::WeightLoss => "weight_loss",
        }
    }
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "Balanced"),
            Self::Diabetic => write!(f, "Diabetic"),
            Self::WeightLoss => write!(f, "Weight Loss"),
        }
    }
}

/// Meal slots in a suggestion plan, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "Breakfast"),
            Self::Lunch => write!(f, "Lunch"),
            Self::Dinner => write!(f, "Dinner"),
            Self::Snacks => write!(f, "Snacks"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parse_is_case_insensitive() {
        assert_eq!(
            DietaryPreference::parse_lenient("DIABETIC"),
            DietaryPreference::Diabetic
        );
        assert_eq!(
            DietaryPreference::parse_lenient("Weight_Loss"),
            DietaryPreference::WeightLoss
        );
    }

    #[test]
    fn test_spaced_weight_loss_falls_back_to_balanced() {
        assert_eq!(
            DietaryPreference::parse_lenient("weight loss"),
            DietaryPreference::Balanced
        );
        assert_eq!(
            DietaryPreference::parse_lenient("weight-loss"),
            DietaryPreference::Balanced
        );
        assert_eq!(
            DietaryPreference::parse_lenient(" weight_loss "),
            DietaryPreference::WeightLoss
        );
    }

    #[test]
    fn test_preference_tags_parse_back() {
        for preference in DietaryPreference::ALL {
            assert_eq!(DietaryPreference::parse_lenient(preference.as_str()), preference);
        }
    }

    #[test]
    fn test_unknown_preference_falls_back_to_balanced() {
        assert_eq!(
            DietaryPreference::parse_lenient("keto"),
            DietaryPreference::Balanced
        );
        assert_eq!(
            DietaryPreference::parse_lenient(""),
            DietaryPreference::Balanced
        );
    }

    #[test]
    fn test_meal_slot_order() {
        let names: Vec<&str> = MealSlot::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["breakfast", "lunch", "dinner", "snacks"]);
    }
}
