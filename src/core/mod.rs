//! Core data types for multilingual food lookup.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`FoodRecord`]: A single catalog entry with names, category, benefits and nutrition
//! - [`FoodNames`]: Display names of a food in each supported language
//! - [`FoodKey`]: The canonical native-script (Telugu) name identifying a record
//! - [`Language`], [`DietaryPreference`], [`MealSlot`]: Lookup and view metadata types
//!
//! ## Naming
//!
//! Every food is keyed by its Telugu name, which doubles as its native-script
//! display name. Other scripts are carried as translations:
//!
//! | Language | Finger Millet |
//! |----------|---------------|
//! | Telugu   | రాగులు        |
//! | Hindi    | रागी          |
//! | Tamil    | கேழ்வரகு      |
//! | Kannada  | ರಾಗಿ          |
//!
//! Tamil and Kannada names are optional; views render [`MISSING_NAME`] in their place.
//!
//! [`FoodRecord`]: food::FoodRecord
//! [`FoodNames`]: food::FoodNames
//! [`FoodKey`]: types::FoodKey
//! [`Language`]: types::Language
//! [`DietaryPreference`]: types::DietaryPreference
//! [`MealSlot`]: types::MealSlot
//! [`MISSING_NAME`]: food::MISSING_NAME

pub mod food;
pub mod types;
