//! Tests for catalog loading from disk and from the embedded data

use gapchef::{catalog, config::CatalogConfig};
use temp_dir::TempDir;

#[test]
fn test_embedded_catalog_loads_without_path() -> anyhow::Result<()> {
    let catalog = catalog::load(&CatalogConfig::default())?;

    assert!(!catalog.is_empty());
    assert!(catalog.cuisines().contains(&"Italian".to_string()));

    Ok(())
}

#[test]
fn test_catalog_loads_from_configured_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("recipes.json");
    std::fs::write(
        &path,
        r#"[{"id": "toast", "name": "Toast", "prepTime": 1, "cookTime": 2, "servings": 1,
             "difficulty": "Easy", "cuisine": "British",
             "ingredients": [{"item": "bread", "amount": "2 slices"}]}]"#,
    )?;

    let config = CatalogConfig {
        path: Some(path.to_string_lossy().into_owned()),
    };
    let catalog = catalog::load(&config)?;

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("toast").map(|r| r.category.as_str()), Some("Other"));

    Ok(())
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let config = CatalogConfig {
        path: Some("/nonexistent/recipes.json".to_string()),
    };

    assert!(catalog::load(&config).is_err());
}
