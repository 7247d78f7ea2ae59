use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::store::FoodCatalog;
use crate::core::food::FoodRecord;
use crate::matching::similarity;
use crate::utils::validation::{normalize_query, validate_query, ValidationError};

/// Default minimum similarity (exclusive) for a fuzzy candidate to be kept
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 70;

/// Default number of top-ranked fuzzy candidates considered
pub const DEFAULT_FUZZY_LIMIT: usize = 3;

/// Which strategy produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Query is a substring of one of the food's names
    Substring,
    /// Query is a substring of a romanized alias
    Phonetic,
    /// Similarity fallback for misspellings
    Fuzzy,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Substring => write!(f, "substring"),
            Self::Phonetic => write!(f, "phonetic"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// A food resolved from a query
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    /// The matched food
    pub food: &'a FoodRecord,

    /// How it was found
    pub strategy: MatchStrategy,

    /// Similarity score (0-100), fuzzy matches only
    pub similarity: Option<u8>,
}

/// Outcome of a validated lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// At least one food matched
    Found(T),
    /// The query was valid but nothing matched
    NotFound,
    /// The query was rejected before matching
    InvalidInput(ValidationError),
}

impl<T> Lookup<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
            Self::InvalidInput(err) => Lookup::InvalidInput(err),
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Configuration for the resolver's fuzzy fallback
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Candidates must score strictly above this
    pub fuzzy_threshold: u8,
    /// How many top-ranked candidates to consider
    pub fuzzy_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            fuzzy_limit: DEFAULT_FUZZY_LIMIT,
        }
    }
}

/// Resolves free-text queries in any script to catalog foods
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a FoodCatalog,
    config: ResolverConfig,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with default configuration
    pub fn new(catalog: &'a FoodCatalog) -> Self {
        Self {
            catalog,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with custom configuration
    pub fn with_config(catalog: &'a FoodCatalog, config: ResolverConfig) -> Self {
        Self { catalog, config }
    }

    /// Find every food matching a query, in result order.
    ///
    /// Substring and phonetic matches are collected together; the fuzzy
    /// fallback only runs when both found nothing. Blank queries match nothing.
    pub fn find_matches(&self, query: &str) -> Vec<MatchResult<'a>> {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let catalog: &'a FoodCatalog = self.catalog;
        let foods = catalog.foods();
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut results = Vec::new();

        // Step 1: substring of any name
        for idx in catalog.index().substring_matches(&needle) {
            let food = &foods[idx];
            if seen.insert(food.native()) {
                results.push(MatchResult {
                    food,
                    strategy: MatchStrategy::Substring,
                    similarity: None,
                });
            }
        }

        // Step 2: substring of a phonetic alias
        for (alias, key) in catalog.aliases() {
            if !alias.contains(needle.as_str()) {
                continue;
            }
            if let Some(food) = catalog.get(key.as_str()) {
                if seen.insert(food.native()) {
                    results.push(MatchResult {
                        food,
                        strategy: MatchStrategy::Phonetic,
                        similarity: None,
                    });
                }
            }
        }

        if !results.is_empty() {
            tracing::debug!(
                "Resolved '{}' to {} foods without fuzzy fallback",
                needle,
                results.len()
            );
            return results;
        }

        // Step 3: fuzzy fallback over English, native and Hindi names
        let index = catalog.index();
        let pool = index.name_pool();
        let ranked = similarity::extract_top(
            &needle,
            pool.iter().map(String::as_str),
            self.config.fuzzy_limit,
        );

        for (pool_idx, score) in ranked {
            tracing::debug!("Fuzzy candidate '{}' scored {}", pool[pool_idx], score);
            if score <= self.config.fuzzy_threshold {
                continue;
            }
            let Some(owner) = index.owner_of(&pool[pool_idx]) else {
                continue;
            };
            let food = &foods[owner];
            if seen.insert(food.native()) {
                results.push(MatchResult {
                    food,
                    strategy: MatchStrategy::Fuzzy,
                    similarity: Some(score),
                });
            }
        }

        tracing::debug!(
            "Resolved '{}' to {} foods by fuzzy fallback",
            needle,
            results.len()
        );
        results
    }

    /// Foods matching a query; empty when nothing matches
    pub fn resolve(&self, query: &str) -> Vec<&'a FoodRecord> {
        self.find_matches(query).into_iter().map(|m| m.food).collect()
    }

    /// The best (first) match for a query
    pub fn first_match(&self, query: &str) -> Option<&'a FoodRecord> {
        self.find_matches(query).into_iter().next().map(|m| m.food)
    }

    /// Validate then resolve, distinguishing "no results" from bad input
    pub fn lookup(&self, query: &str) -> Lookup<Vec<MatchResult<'a>>> {
        match validate_query(query) {
            Err(err) => Lookup::InvalidInput(err),
            Ok(query) => {
                let matches = self.find_matches(query);
                if matches.is_empty() {
                    Lookup::NotFound
                } else {
                    Lookup::Found(matches)
                }
            }
        }
    }
}
