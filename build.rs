use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/foods.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let foods = catalog.get("foods").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'foods' field\n\
             The catalog must have a top-level 'foods' array.\n"
        );
    });

    let foods = foods.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'foods' must be an array\n\
             Got: {foods}\n"
        );
    });

    let keys = validate_foods(foods);
    let alias_count = validate_aliases(catalog, &keys);

    println!(
        "cargo:warning=Validated catalog: {} foods, {alias_count} phonetic aliases",
        foods.len()
    );
}

fn validate_foods(foods: &[serde_json::Value]) -> HashSet<String> {
    let mut keys = HashSet::new();

    for (i, food) in foods.iter().enumerate() {
        let key = food
            .get("key")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Food at index {i} missing 'key' field\n")
            });

        assert!(
            keys.insert(key.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate food key '{key}' (index {i})\n"
        );

        validate_food_fields(food, key, i);
    }

    keys
}

fn validate_food_fields(food: &serde_json::Value, key: &str, index: usize) {
    for field in ["category", "type"] {
        let present = food
            .get(field)
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.trim().is_empty());
        assert!(
            present,
            "\n\nCATALOG BUILD ERROR: Food '{key}' (index {index}) missing '{field}' field\n"
        );
    }

    for name in ["english", "hindi"] {
        let present = food
            .get("names")
            .and_then(|names| names.get(name))
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.trim().is_empty());
        assert!(
            present,
            "\n\nCATALOG BUILD ERROR: Food '{key}' (index {index}) missing '{name}' name\n"
        );
    }

    let benefit_count = food
        .get("benefits")
        .and_then(|v| v.as_array())
        .map_or(0, Vec::len);
    assert!(
        benefit_count > 0,
        "\n\nCATALOG BUILD ERROR: Food '{key}' (index {index}) has no benefits\n\
         Every food needs at least one benefit.\n"
    );

    let nutrient_count = food
        .get("nutrition")
        .and_then(|v| v.as_object())
        .map_or(0, serde_json::Map::len);
    assert!(
        nutrient_count > 0,
        "\n\nCATALOG BUILD ERROR: Food '{key}' (index {index}) has no nutrition entries\n"
    );
}

fn validate_aliases(catalog: &serde_json::Value, keys: &HashSet<String>) -> usize {
    let Some(aliases) = catalog.get("phonetic_aliases").and_then(|a| a.as_object()) else {
        return 0;
    };

    for (alias, target) in aliases {
        assert!(
            alias.is_ascii() && *alias == alias.to_lowercase(),
            "\n\nCATALOG BUILD ERROR: Phonetic alias '{alias}' must be lowercase ASCII\n"
        );

        let target = target.as_str().unwrap_or_default();
        assert!(
            keys.contains(target),
            "\n\nCATALOG BUILD ERROR: Phonetic alias '{alias}' points to unknown food '{target}'\n"
        );
    }

    aliases.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/foods.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
