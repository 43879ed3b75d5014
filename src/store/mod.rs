//! The in-memory, read-only table of recipes every selector queries.

use log::debug;

use crate::model::{Recipe, DEFAULT_TOTAL_TIME};
use crate::text::normalize;

mod loader;

pub use self::loader::load_store;

/// Recipes loaded once at startup. Nothing mutates a store after it is built.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Builds a store from raw records, applying the dataset cleaning rules:
    /// blank `total_time` becomes "0 mins", directions are normalized,
    /// non-finite ratings count as missing and nameless rows are dropped.
    pub fn from_records(records: impl IntoIterator<Item = Recipe>) -> Self {
        let recipes = records.into_iter().filter_map(clean).collect();
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn records(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl<'a> IntoIterator for &'a RecipeStore {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn clean(mut recipe: Recipe) -> Option<Recipe> {
    recipe.name = recipe.name.trim().to_string();
    if recipe.name.is_empty() {
        debug!("Skipping recipe without a name");
        return None;
    }

    if recipe.total_time.trim().is_empty() {
        debug!("'{}' has no total time, using {}", recipe.name, DEFAULT_TOTAL_TIME);
        recipe.total_time = DEFAULT_TOTAL_TIME.to_string();
    }

    if recipe.rating.is_some_and(|rating| !rating.is_finite()) {
        recipe.rating = None;
    }

    recipe.directions = normalize(&recipe.directions);
    Some(recipe)
}
