//! Food catalog storage, indexing and export.
//!
//! The catalog holds every known food with its translations, category,
//! benefits and nutrition facts, plus a table of romanized spellings for
//! users who cannot type the native script. A default catalog is compiled
//! into the binary and validated by `build.rs`; custom catalogs can be loaded
//! from JSON files with the same structure.
//!
//! ## Embedded Catalog
//!
//! The default catalog covers Telugu kitchen staples:
//!
//! - **Millets**: little, finger, proso, foxtail, kodo and pearl millet
//! - **Pulses**: toor, moong, urad, chana and masoor dal
//! - **Grains**: wheat, rice, quinoa, oats
//! - **Spices and seeds**: fenugreek, cumin, sesame, chia
//!
//! ## Example
//!
//! ```rust,no_run
//! use food_resolver::FoodCatalog;
//!
//! let catalog = FoodCatalog::load_embedded().unwrap();
//!
//! for food in &catalog {
//!     println!("{} ({})", food.english(), food.native());
//! }
//!
//! let ragi = catalog.get("రాగులు");
//! ```
//!
//! ## Export
//!
//! ```rust,no_run
//! use food_resolver::FoodCatalog;
//! use std::path::Path;
//!
//! let catalog = FoodCatalog::load_embedded().unwrap();
//! catalog.export_to_file(Path::new("food_database.json")).unwrap();
//! ```

pub mod export;
pub mod index;
pub mod store;
