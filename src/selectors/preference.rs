use log::debug;
use rand::Rng;

use super::{pick, Selector};
use crate::error::{ChatbotError, Result};
use crate::model::Recipe;
use crate::store::RecipeStore;

/// Recipes whose name or cuisine path contains the query, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMatcher {
    query: String,
    needle: String,
}

impl PreferenceMatcher {
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let needle = query.to_lowercase();
        Self { query, needle }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_match(&self, recipe: &Recipe) -> bool {
        recipe.name.to_lowercase().contains(&self.needle)
            || recipe.cuisine_path.to_lowercase().contains(&self.needle)
    }

    /// Every matching recipe, in store order.
    pub fn matches<'a>(&self, store: &'a RecipeStore) -> Vec<&'a Recipe> {
        let matches: Vec<&Recipe> = store.iter().filter(|recipe| self.is_match(recipe)).collect();
        debug!("'{}' matched {} recipes", self.query, matches.len());
        matches
    }
}

impl Selector for PreferenceMatcher {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        store: &'a RecipeStore,
        rng: &mut R,
    ) -> Result<&'a Recipe> {
        pick(&self.matches(store), rng).ok_or_else(|| {
            ChatbotError::EmptyResult(format!("nothing matches '{}'", self.query))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> RecipeStore {
        RecipeStore::from_records(vec![
            Recipe::new("Apple Pie").with_cuisine_path("/Desserts/Pies/Apple Pie Recipes/"),
            Recipe::new("Chicken Curry").with_cuisine_path("/World Cuisine/Asian/Indian/"),
            Recipe::new("Pumpkin Soup").with_cuisine_path("/Soups, Stews and Chili/"),
            Recipe::new("Key lime PIE").with_cuisine_path("/Desserts/"),
        ])
    }

    fn names<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
        recipes.iter().map(|recipe| recipe.name.as_str()).collect()
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let store = store();
        let matches = PreferenceMatcher::new("pIe").matches(&store);
        assert_eq!(names(&matches), vec!["Apple Pie", "Key lime PIE"]);
    }

    #[test]
    fn test_matches_cuisine_path() {
        let store = store();
        let matches = PreferenceMatcher::new("indian").matches(&store);
        assert_eq!(names(&matches), vec!["Chicken Curry"]);
    }

    #[test]
    fn test_matches_are_idempotent() {
        let store = store();
        let matcher = PreferenceMatcher::new("soup");
        assert_eq!(matcher.matches(&store), matcher.matches(&store));
    }

    #[test]
    fn test_select_only_returns_matches() {
        let store = store();
        let matcher = PreferenceMatcher::new("dessert");
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            assert!(matcher.is_match(matcher.select(&store, &mut rng).unwrap()));
        }
    }

    #[test]
    fn test_no_match() {
        let store = store();
        let matcher = PreferenceMatcher::new("sushi");
        assert!(matcher.matches(&store).is_empty());

        let mut rng = StdRng::seed_from_u64(0);
        let err = matcher.select(&store, &mut rng).unwrap_err();
        assert!(matches!(err, ChatbotError::EmptyResult(ref msg) if msg.contains("sushi")));
    }
}
