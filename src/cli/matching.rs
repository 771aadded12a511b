use std::io::Write;

use anyhow::Result;
use gapchef::{Config, recognizer::clean_ingredients};
use gapchef_recipe::{Catalog, SortOption, build_results, sort};

/// Write the annotated result page for a list of ingredients as JSON.
pub fn run(
    config: &Config,
    catalog: &Catalog,
    ingredients: Vec<String>,
    max_results: Option<usize>,
    sort_by: SortOption,
    out: &mut impl Write,
) -> Result<()> {
    let mut options = config.matching.options();
    if let Some(max_results) = max_results {
        options.max_results = max_results;
    }

    let available = clean_ingredients(&ingredients);
    let results = sort(&build_results(catalog, &available, &options), sort_by);

    tracing::debug!(
        ingredients = available.len(),
        results = results.len(),
        "Match finished"
    );

    serde_json::to_writer_pretty(&mut *out, &results)?;
    writeln!(out)?;

    Ok(())
}
