//! Query resolution: turning free text in any script into catalog foods.
//!
//! This module provides the core lookup functionality:
//!
//! - [`Resolver`]: Main entry point for resolving a query to foods
//! - [`Lookup`]: Discriminated outcome separating "no results" from rejected input
//! - [`similarity`]: The 0-100 similarity ratio behind the fuzzy fallback
//!
//! ## Resolution Algorithm
//!
//! Queries are lower-cased and trimmed, then matched with successive strategies:
//!
//! 1. **Substring**: the query appears in the English, Hindi, native, Tamil or Kannada name
//! 2. **Phonetic**: the query appears in a romanized alias such as `ragulu`
//! 3. **Fuzzy**: only when 1 and 2 found nothing, the three best-scoring names
//!    (English, native, Hindi) above a similarity of 70 are kept
//!
//! Results are de-duplicated by food key and keep first-seen order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use food_resolver::{FoodCatalog, Resolver};
//!
//! let catalog = FoodCatalog::load_embedded().unwrap();
//! let resolver = Resolver::new(&catalog);
//!
//! for m in resolver.find_matches("ragulu") {
//!     println!("{} via {}", m.food.english(), m.strategy);
//! }
//! ```
//!
//! [`Resolver`]: engine::Resolver
//! [`Lookup`]: engine::Lookup

pub mod engine;
pub mod similarity;

pub use engine::{Lookup, MatchResult, MatchStrategy, Resolver, ResolverConfig};
