use gapchef_recipe::{Catalog, CatalogError, CatalogResult};
use rust_embed::RustEmbed;

use crate::config::CatalogConfig;

#[derive(RustEmbed)]
#[folder = "data/"]
struct CatalogData;

const DEFAULT_CATALOG: &str = "recipes.json";

/// The catalog compiled into the binary.
pub fn embedded() -> CatalogResult<Catalog> {
    let file = CatalogData::get(DEFAULT_CATALOG).ok_or_else(|| {
        CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "embedded recipes.json is missing",
        ))
    })?;

    Catalog::from_json_slice(&file.data)
}

/// Load the configured catalog file, or the embedded one when none is set.
pub fn load(config: &CatalogConfig) -> CatalogResult<Catalog> {
    let catalog = match &config.path {
        Some(path) => Catalog::load(path)?,
        None => embedded()?,
    };

    tracing::info!(
        recipes = catalog.len(),
        source = config.path.as_deref().unwrap_or("embedded"),
        "Recipe catalog loaded"
    );

    Ok(catalog)
}
