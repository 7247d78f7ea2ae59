//! Catalog-wide properties of the resolver and its views.

use food_resolver::views::category::foods_in_category;
use food_resolver::views::compare::compare;
use food_resolver::views::meals::suggest_meals_for;
use food_resolver::{FoodCatalog, Lookup, MatchStrategy, MealSlot, Resolver};

fn catalog() -> &'static FoodCatalog {
    FoodCatalog::shared().unwrap()
}

#[test]
fn test_every_key_resolves_to_itself() {
    let resolver = Resolver::new(catalog());
    for food in catalog() {
        let matches = resolver.resolve(food.native());
        assert!(
            matches.iter().any(|m| m.key == food.key),
            "{} did not resolve to itself",
            food.key
        );
    }
}

#[test]
fn test_every_english_name_resolves_without_fuzzy() {
    let resolver = Resolver::new(catalog());
    for food in catalog() {
        let matches = resolver.find_matches(food.english());
        let hit = matches
            .iter()
            .find(|m| m.food.key == food.key)
            .unwrap_or_else(|| panic!("{} not found", food.english()));
        assert_eq!(hit.strategy, MatchStrategy::Substring);
    }
}

#[test]
fn test_every_alias_resolves_to_its_target() {
    let resolver = Resolver::new(catalog());
    for (alias, key) in catalog().aliases() {
        let matches = resolver.resolve(alias);
        assert!(
            matches.iter().any(|m| m.key == *key),
            "alias {alias} did not resolve to {key}"
        );
    }
}

#[test]
fn test_blank_queries_resolve_to_nothing() {
    let resolver = Resolver::new(catalog());
    assert!(resolver.resolve("").is_empty());
    assert!(resolver.resolve("   ").is_empty());
    assert!(matches!(resolver.lookup("\t"), Lookup::InvalidInput(_)));
}

#[test]
fn test_resolution_ignores_case() {
    let resolver = Resolver::new(catalog());
    assert_eq!(resolver.resolve("RAGI"), resolver.resolve("ragi"));
    assert_eq!(resolver.resolve("WHEAT"), resolver.resolve("wheat"));
    assert_eq!(resolver.resolve("  Moong Dal "), resolver.resolve("moong dal"));
}

#[test]
fn test_misspelling_falls_back_to_fuzzy() {
    let resolver = Resolver::new(catalog());
    let matches = resolver.find_matches("quinao");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].food.english(), "Quinoa");
    assert_eq!(matches[0].strategy, MatchStrategy::Fuzzy);
    assert_eq!(matches[0].similarity, Some(83));
}

#[test]
fn test_results_have_no_duplicates() {
    let resolver = Resolver::new(catalog());
    // "oats" is both an English name and an alias
    assert_eq!(resolver.resolve("oats").len(), 1);

    let dals = resolver.resolve("dal");
    let mut keys: Vec<&str> = dals.iter().map(|f| f.native()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), dals.len());
}

#[test]
fn test_compare_partial_batch() {
    let resolver = Resolver::new(catalog());
    let result = compare(&resolver, &["Ragi", "NoSuchFoodXYZ", "Wheat"]);
    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Finger Millet", "Wheat"]);
}

#[test]
fn test_category_millet_any_case() {
    for name in ["Millet", "millet", "MILLET"] {
        let millets = foods_in_category(catalog(), name);
        assert_eq!(millets.len(), 6, "{name}");
        assert!(millets.iter().all(|m| m.english.ends_with("Millet")));
    }
}

#[test]
fn test_diabetic_breakfast() {
    let plan = suggest_meals_for(catalog(), "diabetic");
    let breakfast = plan.slot(MealSlot::Breakfast);
    let names: Vec<&str> = breakfast.iter().map(|s| s.english.as_str()).collect();
    assert_eq!(names, vec!["Finger Millet", "Proso Millet", "Oats"]);
    assert!(breakfast.iter().all(|s| s.benefits.len() == 2));
}

#[test]
fn test_export_reparses_to_same_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("food_database.json");
    catalog().export_to_file(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let records = food_resolver::catalog::export::parse_export_json(&json).unwrap();
    assert_eq!(records.as_slice(), catalog().foods());
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("food_database.json");
    std::fs::write(&path, "stale").unwrap();

    catalog().export_to_file(&path).unwrap();
    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.starts_with('{'));
    assert!(!json.contains("stale"));
}
