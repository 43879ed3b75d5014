//! Text blocks printed for each kind of suggestion.

use crate::model::Recipe;

pub const SEPARATOR: &str =
    "-------------------------------------------------------------------------------------------";

pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{:.1}", rating),
        None => "not rated".to_string(),
    }
}

pub fn render_random(recipe: &Recipe) -> String {
    format!(
        "Here's a random recipe suggestion for you:\n\n\
         [Name]: \n{}\n\n\
         [Ingredients]: \n{}\n\n\
         [Instructions]: \n{}\n\n\
         [Total Preparation Time]: \n{}\n\
         {}",
        recipe.name, recipe.ingredients, recipe.directions, recipe.total_time, SEPARATOR
    )
}

pub fn render_high_rated(recipe: &Recipe) -> String {
    format!(
        "Here's a highly rated recipe for you: {}\n\n\
         [Name]: \n{}\n\n\
         [Ingredients]: \n{}\n\n\
         [Instructions]: \n{}\n\n\
         [Total Preparation Time]: \n{}\n\n\
         [Rating]: \n{}\n\
         {}",
        recipe.name,
        recipe.name,
        recipe.ingredients,
        recipe.directions,
        recipe.total_time,
        format_rating(recipe.rating),
        SEPARATOR
    )
}

/// Suggestion made for a time budget.
pub fn render_quick(recipe: &Recipe) -> String {
    format!(
        "Here's a quick recipe suggestion for you:\n\n\
         [Name]: {}\n\n\
         [Ingredients]: {}\n\n\
         [Instructions]: {}\n\n\
         [Total Preparation Time]: {}\n\
         {}",
        recipe.name, recipe.ingredients, recipe.directions, recipe.total_time, SEPARATOR
    )
}

pub fn render_preference(recipe: &Recipe) -> String {
    format!(
        "How about trying ***{}***? Here's a brief about it:\n\n\
         [Ingredients]: {}\n\n\
         [Instructions]: {}\n\n\
         [Total Preparation Time]: {}\n\
         {}",
        recipe.name, recipe.ingredients, recipe.directions, recipe.total_time, SEPARATOR
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple_pie() -> Recipe {
        Recipe::new("Apple Pie")
            .with_ingredients("Apples, Sugar, Pie crust")
            .with_directions("Bake at 350 for 20 minutes")
            .with_total_time("20 mins")
            .with_rating(4.9)
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 91);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_high_rated_message() {
        let expected = format!(
            "Here's a highly rated recipe for you: Apple Pie\n\n\
             [Name]: \nApple Pie\n\n\
             [Ingredients]: \nApples, Sugar, Pie crust\n\n\
             [Instructions]: \nBake at 350 for 20 minutes\n\n\
             [Total Preparation Time]: \n20 mins\n\n\
             [Rating]: \n4.9\n{}",
            SEPARATOR
        );
        assert_eq!(render_high_rated(&apple_pie()), expected);
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(5.0)), "5.0");
        assert_eq!(format_rating(None), "not rated");
    }

    #[test]
    fn test_every_block_ends_with_separator() {
        let recipe = apple_pie();
        for block in [
            render_random(&recipe),
            render_quick(&recipe),
            render_preference(&recipe),
        ] {
            assert!(block.ends_with(SEPARATOR));
            assert!(block.contains("Bake at 350 for 20 minutes"));
        }
    }

    #[test]
    fn test_preference_headline() {
        assert!(render_preference(&apple_pie()).starts_with("How about trying ***Apple Pie***?"));
    }
}
