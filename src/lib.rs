//! # food-resolver
//!
//! A library for resolving food names typed in any Indian script, or in a
//! rough romanized spelling, to a curated catalog of kitchen staples.
//!
//! Shoppers and cooks name the same grain a dozen ways: "Ragi", "రాగులు",
//! "ರಾಗಿ", "रागी", or just "ragulu". `food-resolver` maps each of these to a
//! canonical catalog record carrying translations, category, health
//! benefits and per-100g nutrition facts.
//!
//! ## Features
//!
//! - **Substring matching**: Across English, Hindi, Telugu, Tamil and Kannada names
//! - **Phonetic aliases**: Romanized spellings for users without a native keyboard
//! - **Fuzzy fallback**: Catches misspellings like "whaet" or "quinao"
//! - **Derived views**: Category listings, nutrition comparison, meal suggestions
//!   and printable retail labels
//! - **Export**: The whole catalog as a keyed JSON document
//!
//! ## Example
//!
//! ```rust,no_run
//! use food_resolver::{FoodCatalog, Resolver};
//!
//! // Load the embedded catalog
//! let catalog = FoodCatalog::load_embedded().unwrap();
//!
//! // Resolve a query in any script
//! let resolver = Resolver::new(&catalog);
//! for m in resolver.find_matches("ragi") {
//!     println!("{} ({}) via {}", m.food.english(), m.food.native(), m.strategy);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog storage, indexing and export
//! - [`core`]: Core data types for foods and preferences
//! - [`matching`]: Resolution engine and similarity scoring
//! - [`views`]: Category, comparison, meal and label views
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based lookup

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;
pub mod views;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, FoodCatalog};
pub use core::food::FoodRecord;
pub use core::types::*;
pub use matching::engine::{Lookup, MatchResult, MatchStrategy, Resolver, ResolverConfig};
