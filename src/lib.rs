//! Suggests recipes from a Food.com style dataset by time budget, rating,
//! keyword or pure chance, through a small interactive chat.

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod selectors;
pub mod session;
pub mod store;
pub mod text;

pub use builder::{Chatbot, ChatbotBuilder};
pub use config::{load_config, ChatbotConfig};
pub use error::{ChatbotError, Result};
pub use model::Recipe;
pub use selectors::{
    HighRatedSelector, PreferenceMatcher, RandomSelector, Selector, TimeBoundSelector, TimeBuckets,
};
pub use session::Session;
pub use store::{load_store, RecipeStore};
pub use text::{normalize, parse_duration};
