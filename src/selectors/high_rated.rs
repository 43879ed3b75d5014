use log::debug;
use rand::Rng;

use super::{pick, Selector};
use crate::error::{ChatbotError, Result};
use crate::model::Recipe;
use crate::store::RecipeStore;

pub const DEFAULT_RATING_THRESHOLD: f64 = 4.8;

/// Recipes rated at least `threshold`. Unrated recipes never qualify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighRatedSelector {
    pub threshold: f64,
}

impl Default for HighRatedSelector {
    fn default() -> Self {
        Self::new(DEFAULT_RATING_THRESHOLD)
    }
}

impl HighRatedSelector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn candidates<'a>(&self, store: &'a RecipeStore) -> Vec<&'a Recipe> {
        store
            .iter()
            .filter(|recipe| recipe.rating.is_some_and(|rating| rating >= self.threshold))
            .collect()
    }
}

impl Selector for HighRatedSelector {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        store: &'a RecipeStore,
        rng: &mut R,
    ) -> Result<&'a Recipe> {
        let candidates = self.candidates(store);
        debug!(
            "{} recipes rated {} or higher",
            candidates.len(),
            self.threshold
        );

        pick(&candidates, rng).ok_or_else(|| {
            ChatbotError::EmptyResult(format!(
                "no recipe has a rating of {} or higher",
                self.threshold
            ))
        })
    }
}
