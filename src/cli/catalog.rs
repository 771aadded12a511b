use std::io::Write;

use anyhow::Result;
use gapchef_recipe::Catalog;
use serde_json::json;

/// Write catalog statistics as JSON.
pub fn stats(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    let ingredient_lines = catalog.iter().map(|r| r.ingredients.len()).sum::<usize>();
    let rated = catalog.iter().filter(|r| r.rating.is_some()).count();

    let stats = json!({
        "recipes": catalog.len(),
        "cuisines": catalog.cuisines(),
        "categories": catalog.categories(),
        "ingredientLines": ingredient_lines,
        "rated": rated,
    });

    serde_json::to_writer_pretty(&mut *out, &stats)?;
    writeln!(out)?;

    Ok(())
}
