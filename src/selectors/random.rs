use rand::seq::SliceRandom;
use rand::Rng;

use super::Selector;
use crate::error::{ChatbotError, Result};
use crate::model::Recipe;
use crate::store::RecipeStore;

/// Any recipe in the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl Selector for RandomSelector {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        store: &'a RecipeStore,
        rng: &mut R,
    ) -> Result<&'a Recipe> {
        store
            .records()
            .choose(rng)
            .ok_or_else(|| ChatbotError::EmptyResult("the recipe collection is empty".to_string()))
    }
}
