use log::debug;
use rand::Rng;

use super::{pick, Selector};
use crate::error::{ChatbotError, Result};
use crate::model::Recipe;
use crate::store::RecipeStore;

/// Recipes that fit in `max_minutes`, preferring ones that take exactly that long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBoundSelector {
    pub max_minutes: u32,
}

/// Candidates for a time budget, split by how well they use it.
#[derive(Debug, Default)]
pub struct TimeBuckets<'a> {
    /// Recipes taking exactly the budget
    pub exact: Vec<&'a Recipe>,
    /// Recipes taking more than zero minutes but less than the budget
    pub under_budget: Vec<&'a Recipe>,
}

impl<'a> TimeBuckets<'a> {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.under_budget.is_empty()
    }

    /// Picks from the exact bucket, or from the under-budget one when no
    /// recipe matches exactly.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a Recipe> {
        if self.exact.is_empty() {
            pick(&self.under_budget, rng)
        } else {
            pick(&self.exact, rng)
        }
    }
}

impl TimeBoundSelector {
    pub fn new(max_minutes: u32) -> Self {
        Self { max_minutes }
    }

    /// Sorts the store into exact and under-budget buckets. Recipes with no
    /// usable time (zero or unparseable) are left out.
    pub fn buckets<'a>(&self, store: &'a RecipeStore) -> TimeBuckets<'a> {
        let mut buckets = TimeBuckets::default();

        for recipe in store {
            match recipe.minutes() {
                Ok(0) => {}
                Ok(minutes) if minutes == self.max_minutes => buckets.exact.push(recipe),
                Ok(minutes) if minutes < self.max_minutes => buckets.under_budget.push(recipe),
                Ok(_) => {}
                Err(e) => debug!("Skipping '{}': {}", recipe.name, e),
            }
        }

        debug!(
            "{} min budget: {} exact, {} under budget",
            self.max_minutes,
            buckets.exact.len(),
            buckets.under_budget.len()
        );
        buckets
    }
}

impl Selector for TimeBoundSelector {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        store: &'a RecipeStore,
        rng: &mut R,
    ) -> Result<&'a Recipe> {
        self.buckets(store).pick(rng).ok_or_else(|| {
            ChatbotError::EmptyResult(format!(
                "no recipe can be prepared in {} minutes",
                self.max_minutes
            ))
        })
    }
}
