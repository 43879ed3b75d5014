//! Query functions over a [`RecipeStore`].
//!
//! Every selector only borrows the store and draws its randomness from the
//! generator it is handed, so a seeded generator gives repeatable picks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::model::Recipe;
use crate::store::RecipeStore;

mod high_rated;
mod preference;
mod random;
mod time_bound;

pub use self::high_rated::{HighRatedSelector, DEFAULT_RATING_THRESHOLD};
pub use self::preference::PreferenceMatcher;
pub use self::random::RandomSelector;
pub use self::time_bound::{TimeBoundSelector, TimeBuckets};

pub trait Selector {
    /// Picks one recipe uniformly at random among the selector's candidates.
    ///
    /// # Errors
    /// Returns [`crate::ChatbotError::EmptyResult`] when no recipe qualifies.
    fn select<'a, R: Rng + ?Sized>(&self, store: &'a RecipeStore, rng: &mut R)
        -> Result<&'a Recipe>;
}

/// Uniform pick from an already filtered candidate list.
pub fn pick<'a, R: Rng + ?Sized>(candidates: &[&'a Recipe], rng: &mut R) -> Option<&'a Recipe> {
    candidates.choose(rng).copied()
}
