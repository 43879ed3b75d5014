use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::text::parse_duration;

/// Duration stored for recipes whose source row had no total time.
pub const DEFAULT_TOTAL_TIME: &str = "0 mins";

/// One row of the recipe dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "recipe_name", alias = "name")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub directions: String,
    /// Human readable, e.g. "1 hr 20 mins"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub total_time: String,
    /// Food.com rating in `[0, 5]`; `None` when the recipe was never rated
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cuisine_path: String,
}

// JSON exports write missing text cells as null
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_time: DEFAULT_TOTAL_TIME.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn with_directions(mut self, directions: impl Into<String>) -> Self {
        self.directions = directions.into();
        self
    }

    pub fn with_total_time(mut self, total_time: impl Into<String>) -> Self {
        self.total_time = total_time.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_cuisine_path(mut self, cuisine_path: impl Into<String>) -> Self {
        self.cuisine_path = cuisine_path.into();
        self
    }

    /// Total preparation time in minutes.
    pub fn minutes(&self) -> Result<u32> {
        parse_duration(&self.total_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_default_time() {
        let recipe = Recipe::new("Toast");
        assert_eq!(recipe.total_time, DEFAULT_TOTAL_TIME);
        assert_eq!(recipe.minutes().unwrap(), 0);
        assert!(recipe.rating.is_none());
    }

    #[test]
    fn test_minutes() {
        let recipe = Recipe::new("Stew").with_total_time("2 hrs 15 mins");
        assert_eq!(recipe.minutes().unwrap(), 135);
    }

    #[test]
    fn test_deserialize_accepts_name_alias() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"name": "Soup", "rating": 4.2}"#).unwrap();
        assert_eq!(recipe.name, "Soup");
        assert_eq!(recipe.rating, Some(4.2));
        assert!(recipe.total_time.is_empty());
    }

    #[test]
    fn test_deserialize_null_text_as_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"recipe_name": "Oats", "ingredients": null, "directions": null,
                "total_time": null, "rating": null, "cuisine_path": null}"#,
        )
        .unwrap();
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.directions.is_empty());
        assert!(recipe.total_time.is_empty());
        assert!(recipe.cuisine_path.is_empty());
        assert!(recipe.rating.is_none());
    }

    #[test]
    fn test_serialize_uses_dataset_column_names() {
        let json = serde_json::to_value(Recipe::new("Soup")).unwrap();
        assert_eq!(json["recipe_name"], "Soup");
        assert!(json["rating"].is_null());
    }
}
