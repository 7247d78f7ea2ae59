use std::collections::HashMap;

use crate::core::food::FoodRecord;

/// Lower-cased copies of the names a query is substring-matched against
#[derive(Debug, Clone)]
pub struct SearchFields {
    pub english: String,
    pub hindi: String,
    pub native: String,
    pub tamil: Option<String>,
    pub kannada: Option<String>,
}

impl SearchFields {
    fn from_record(food: &FoodRecord) -> Self {
        Self {
            english: food.names.english.to_lowercase(),
            // Hindi and the native key are matched as stored
            hindi: food.names.hindi.clone(),
            native: food.key.0.clone(),
            tamil: food.names.tamil.as_ref().map(|s| s.to_lowercase()),
            kannada: food.names.kannada.as_ref().map(|s| s.to_lowercase()),
        }
    }

    /// Does any searchable name contain `needle`?
    pub fn contains(&self, needle: &str) -> bool {
        self.english.contains(needle)
            || self.hindi.contains(needle)
            || self.native.contains(needle)
            || self.tamil.as_deref().is_some_and(|t| t.contains(needle))
            || self.kannada.as_deref().is_some_and(|k| k.contains(needle))
    }
}

/// Lookup indexes precomputed when the catalog is built
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    /// Per-food search fields, parallel to the catalog's foods
    fields: Vec<SearchFields>,

    /// Fuzzy candidate names: lower-cased English, native key, Hindi per food
    name_pool: Vec<String>,

    /// Index: pooled name -> first food (catalog order) that owns it
    pool_owner: HashMap<String, usize>,
}

impl SearchIndex {
    pub fn build(foods: &[FoodRecord]) -> Self {
        let fields: Vec<SearchFields> = foods.iter().map(SearchFields::from_record).collect();

        let mut name_pool = Vec::with_capacity(foods.len() * 3);
        let mut pool_owner = HashMap::new();

        for (idx, f) in fields.iter().enumerate() {
            for name in [&f.english, &f.native, &f.hindi] {
                name_pool.push(name.clone());
                pool_owner.entry(name.clone()).or_insert(idx);
            }
        }

        Self {
            fields,
            name_pool,
            pool_owner,
        }
    }

    /// Indices of foods whose names contain `needle`, in catalog order
    pub fn substring_matches<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.fields
            .iter()
            .enumerate()
            .filter(move |(_, f)| f.contains(needle))
            .map(|(idx, _)| idx)
    }

    /// Candidate names for fuzzy ranking, in pool order
    pub fn name_pool(&self) -> &[String] {
        &self.name_pool
    }

    /// The first food in catalog order owning a pooled name
    pub fn owner_of(&self, pooled_name: &str) -> Option<usize> {
        self.pool_owner.get(pooled_name).copied()
    }
}
