//! Keyed JSON export of the catalog.
//!
//! The export is a single JSON object keyed by each food's native name, in
//! catalog order. Non-ASCII text is written as-is so the file stays
//! human-diffable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::catalog::store::CatalogError;
use crate::core::food::{FoodNames, FoodRecord, Nutrition};
use crate::core::types::FoodKey;

/// One food as it appears in the keyed export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFood {
    pub english: String,

    pub hindi: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tamil: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kannada: Option<String>,

    pub category: String,

    #[serde(rename = "type")]
    pub food_type: String,

    pub benefits: Vec<String>,

    pub nutrition: Nutrition,
}

impl From<&FoodRecord> for ExportedFood {
    fn from(food: &FoodRecord) -> Self {
        Self {
            english: food.names.english.clone(),
            hindi: food.names.hindi.clone(),
            tamil: food.names.tamil.clone(),
            kannada: food.names.kannada.clone(),
            category: food.category.clone(),
            food_type: food.food_type.clone(),
            benefits: food.benefits.clone(),
            nutrition: food.nutrition.clone(),
        }
    }
}

impl ExportedFood {
    #[must_use]
    pub fn into_record(self, key: String) -> FoodRecord {
        FoodRecord {
            key: FoodKey(key),
            names: FoodNames {
                english: self.english,
                hindi: self.hindi,
                tamil: self.tamil,
                kannada: self.kannada,
            },
            category: self.category,
            food_type: self.food_type,
            benefits: self.benefits,
            nutrition: self.nutrition,
        }
    }
}

/// Serialize foods into the keyed export document
pub fn to_export_json(foods: &[FoodRecord]) -> Result<String, CatalogError> {
    let document: IndexMap<&str, ExportedFood> = foods
        .iter()
        .map(|food| (food.native(), ExportedFood::from(food)))
        .collect();
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a keyed export document back into records, preserving order
pub fn parse_export_json(json: &str) -> Result<Vec<FoodRecord>, CatalogError> {
    let document: IndexMap<String, ExportedFood> = serde_json::from_str(json)?;
    Ok(document
        .into_iter()
        .map(|(key, food)| food.into_record(key))
        .collect())
}

/// Write `contents` to `path` atomically.
///
/// The data goes to a temporary file in the destination directory which is
/// then renamed over `path`; on failure the destination is untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), CatalogError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(CatalogError::WriteError)?;
    writeln!(temp, "{contents}").map_err(CatalogError::WriteError)?;
    temp.as_file().sync_all().map_err(CatalogError::WriteError)?;
    temp.persist(path)
        .map_err(|e| CatalogError::WriteError(e.error))?;

    Ok(())
}
