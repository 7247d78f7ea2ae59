use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use crate::catalog::export;
use crate::catalog::index::SearchIndex;
use crate::core::food::FoodRecord;
use crate::core::types::FoodKey;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to write catalog export: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    pub foods: Vec<FoodRecord>,

    /// Romanized spelling -> food key, in lookup order
    #[serde(default)]
    pub phonetic_aliases: IndexMap<String, FoodKey>,
}

/// The immutable food catalog with its lookup indexes
#[derive(Debug)]
pub struct FoodCatalog {
    /// All foods, in catalog order
    foods: Vec<FoodRecord>,

    /// Index: food key -> index in foods vec
    key_to_index: HashMap<FoodKey, usize>,

    /// Phonetic alias -> food key, in table order
    aliases: IndexMap<String, FoodKey>,

    /// Pre-lowered search fields and fuzzy name pool
    index: SearchIndex,
}

impl FoodCatalog {
    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/foods.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Process-wide embedded catalog, parsed on first use.
    pub fn shared() -> Result<&'static Self, CatalogError> {
        static SHARED: OnceLock<FoodCatalog> = OnceLock::new();

        if let Some(catalog) = SHARED.get() {
            return Ok(catalog);
        }
        let catalog = Self::load_embedded()?;
        Ok(SHARED.get_or_init(|| catalog))
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        Self::from_parts(data.foods, data.phonetic_aliases)
    }

    /// Build a catalog from records and an alias table.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` for duplicate keys, records missing required
    /// fields, or aliases that are not lowercase or point at unknown foods.
    pub fn from_parts(
        foods: Vec<FoodRecord>,
        aliases: IndexMap<String, FoodKey>,
    ) -> Result<Self, CatalogError> {
        let mut key_to_index = HashMap::with_capacity(foods.len());

        for (idx, food) in foods.iter().enumerate() {
            food.validate().map_err(CatalogError::Invalid)?;
            if key_to_index.insert(food.key.clone(), idx).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate food key '{}'",
                    food.key
                )));
            }
        }

        for (alias, key) in &aliases {
            if *alias != alias.to_lowercase() {
                return Err(CatalogError::Invalid(format!(
                    "phonetic alias '{alias}' must be lowercase"
                )));
            }
            if !key_to_index.contains_key(key) {
                return Err(CatalogError::Invalid(format!(
                    "phonetic alias '{alias}' points to unknown food '{key}'"
                )));
            }
        }

        let index = SearchIndex::build(&foods);

        Ok(Self {
            foods,
            key_to_index,
            aliases,
            index,
        })
    }

    /// Get a food by its native key
    pub fn get(&self, key: &str) -> Option<&FoodRecord> {
        self.key_to_index.get(key).map(|&idx| &self.foods[idx])
    }

    /// All foods in catalog order
    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodRecord> {
        self.foods.iter()
    }

    /// Phonetic alias table in lookup order
    pub fn aliases(&self) -> &IndexMap<String, FoodKey> {
        &self.aliases
    }

    pub(crate) fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for food in &self.foods {
            if !categories.contains(&food.category.as_str()) {
                categories.push(&food.category);
            }
        }
        categories
    }

    /// Export the loadable catalog format (foods plus aliases) to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            foods: self.foods.clone(),
            phonetic_aliases: self.aliases.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Export every food keyed by its native name
    pub fn to_export_json(&self) -> Result<String, CatalogError> {
        export::to_export_json(&self.foods)
    }

    /// Write the keyed export to `path` without leaving partial files behind
    pub fn export_to_file(&self, path: &Path) -> Result<(), CatalogError> {
        let json = self.to_export_json()?;
        export::write_atomic(path, &json)?;
        tracing::info!("Catalog exported to {}", path.display());
        Ok(())
    }

    /// Number of foods in catalog
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl<'a> IntoIterator for &'a FoodCatalog {
    type Item = &'a FoodRecord;
    type IntoIter = std::slice::Iter<'a, FoodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.foods.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grain(key: &str, english: &str) -> FoodRecord {
        FoodRecord::new(key, english, "अनाज", "Grain", "Cereal")
            .with_benefits(["Energy source"])
            .with_nutrient("protein", "6.8g")
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 19);
        assert!(!catalog.aliases().is_empty());
    }

    #[test]
    fn test_shared_catalog_is_loaded_once() {
        let a = FoodCatalog::shared().unwrap();
        let b = FoodCatalog::shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_catalog_get_by_key() {
        let catalog = FoodCatalog::load_embedded().unwrap();

        let ragi = catalog.get("రాగులు").unwrap();
        assert_eq!(ragi.english(), "Finger Millet");
        assert_eq!(ragi.nutrient("calcium"), Some("344mg"));
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        assert!(catalog.get("Finger Millet").is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        assert_eq!(catalog.foods()[0].english(), "Little Millet");
        assert_eq!(catalog.foods()[18].english(), "Chia Seeds");
        assert_eq!(
            catalog.categories(),
            vec!["Millet", "Pulse", "Grain", "Spice", "Seeds"]
        );
    }

    #[test]
    fn test_every_alias_target_exists() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        for (alias, key) in catalog.aliases() {
            assert!(catalog.get(key.as_str()).is_some(), "alias {alias}");
        }
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = FoodCatalog::from_parts(
            vec![grain("బియ్యం", "Rice"), grain("బియ్యం", "Rice again")],
            IndexMap::new(),
        );
        assert!(matches!(result, Err(CatalogError::Invalid(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_dangling_alias_rejected() {
        let mut aliases = IndexMap::new();
        aliases.insert("godhuma".to_string(), FoodKey::new("గోధుమ"));
        let result = FoodCatalog::from_parts(vec![grain("బియ్యం", "Rice")], aliases);
        assert!(matches!(result, Err(CatalogError::Invalid(msg)) if msg.contains("unknown food")));
    }

    #[test]
    fn test_uppercase_alias_rejected() {
        let mut aliases = IndexMap::new();
        aliases.insert("Biyyam".to_string(), FoodKey::new("బియ్యం"));
        let result = FoodCatalog::from_parts(vec![grain("బియ్యం", "Rice")], aliases);
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_catalog_to_json_round_trip() {
        let catalog = FoodCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"created_at\""));
        assert!(json.contains("రాగులు"));

        let reloaded = FoodCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.foods(), catalog.foods());
        assert_eq!(reloaded.aliases(), catalog.aliases());
    }

    #[test]
    fn test_parse_error_reported() {
        let result = FoodCatalog::from_json("{ not json");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }
}
