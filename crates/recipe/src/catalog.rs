use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::{CatalogError, CatalogResult, Recipe};

/// Read-only recipe collection, loaded once and shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate recipe ids.
    pub fn new(recipes: Vec<Recipe>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.to_owned()));
            }
        }

        Ok(Self { recipes })
    }

    pub fn from_json_slice(data: &[u8]) -> CatalogResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_slice(data)?;
        Self::new(recipes)
    }

    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let catalog = Self::from_json_slice(&data)?;

        tracing::debug!(path = %path.display(), recipes = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Distinct cuisine labels, sorted.
    pub fn cuisines(&self) -> Vec<String> {
        self.distinct(|r| &r.cuisine)
    }

    /// Distinct category labels, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.distinct(|r| &r.category)
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Recipe) -> &'a String) -> Vec<String> {
        self.recipes
            .iter()
            .map(field)
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
