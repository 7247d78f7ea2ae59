//! Fixed-width retail labels.
//!
//! Widths are counted in `char`s. Scripts with combining marks may render
//! slightly narrower than the border in a terminal.

use crate::core::food::{FoodRecord, MISSING_NAME};
use crate::matching::engine::Resolver;

/// Characters between the left and right border
pub const LABEL_INNER_WIDTH: usize = 62;

/// Benefits printed on a label
pub const LABEL_BENEFIT_COUNT: usize = 3;

const NAME_WIDTH: usize = LABEL_INNER_WIDTH - 4;

fn border(left: char, right: char) -> String {
    let mut line = String::with_capacity((LABEL_INNER_WIDTH + 2) * 3);
    line.push(left);
    line.extend(std::iter::repeat('═').take(LABEL_INNER_WIDTH));
    line.push(right);
    line
}

fn row(content: &str) -> String {
    format!("║{:<width$}║", format!("  {content}"), width = LABEL_INNER_WIDTH)
}

/// Render one food as a bordered text block
#[must_use]
pub fn render_label(food: &FoodRecord) -> String {
    let mut lines = vec![
        border('╔', '╗'),
        row(&format!("{:^NAME_WIDTH$}", food.english())),
        row(&format!("{:^NAME_WIDTH$}", food.native())),
        row(&format!("{:^NAME_WIDTH$}", food.hindi())),
        row(""),
        row(&format!(
            "Category: {:<15} Type: {:<20}",
            food.category, food.food_type
        )),
        row(""),
        row("Key Benefits:"),
    ];

    for (i, benefit) in food.top_benefits(LABEL_BENEFIT_COUNT).iter().enumerate() {
        lines.push(row(&format!("{}. {}", i + 1, benefit)));
    }

    lines.push(row(""));
    lines.push(row("Nutrition Highlights (per 100g):"));
    lines.push(row(&format!(
        "Protein: {:<10} Fiber: {:<15}",
        food.nutrient("protein").unwrap_or(MISSING_NAME),
        food.nutrient("fiber").unwrap_or(MISSING_NAME)
    )));
    lines.push(border('╚', '╝'));

    lines.join("\n")
}

/// Labels for the first match of each query; unresolved queries are skipped
pub fn render_labels<S: AsRef<str>>(resolver: &Resolver<'_>, queries: &[S]) -> Vec<String> {
    queries
        .iter()
        .filter_map(|query| resolver.first_match(query.as_ref()))
        .map(render_label)
        .collect()
}
