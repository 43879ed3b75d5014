use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{ChatbotConfig, ChatbotError, RecipeStore, Session};

/// Builder for configuring a chat session
#[derive(Debug, Default)]
pub struct ChatbotBuilder<'s> {
    store: Option<&'s RecipeStore>,
    config: ChatbotConfig,
    seed: Option<u64>,
}

impl<'s> ChatbotBuilder<'s> {
    /// Set the recipes the session suggests from
    ///
    /// # Example
    /// ```
    /// use recipe_chatbot::{Chatbot, Recipe, RecipeStore};
    ///
    /// let store = RecipeStore::from_records(vec![Recipe::new("Apple Pie")]);
    /// let builder = Chatbot::builder().store(&store);
    /// ```
    pub fn store(mut self, store: &'s RecipeStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ChatbotConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the minimum rating for highly rated suggestions
    pub fn high_rating_threshold(mut self, threshold: f64) -> Self {
        self.config.high_rating_threshold = threshold;
        self
    }

    /// Go back to the main menu after a mode finishes
    pub fn return_to_menu(mut self, enabled: bool) -> Self {
        self.config.return_to_menu = enabled;
        self
    }

    /// Repeat questions on unrecognised answers instead of leaving the mode
    pub fn strict_commands(mut self, enabled: bool) -> Self {
        self.config.strict_commands = enabled;
        self
    }

    /// Seed the random generator so suggestions are repeatable
    ///
    /// Takes precedence over the seed in the configuration.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a session reading answers from `input` and writing to `output`
    ///
    /// # Errors
    /// Returns `ChatbotError::BuilderError` if no store was given.
    ///
    /// # Example
    /// ```
    /// use recipe_chatbot::{Chatbot, Recipe, RecipeStore};
    /// use std::io::Cursor;
    ///
    /// let store = RecipeStore::from_records(vec![Recipe::new("Apple Pie")]);
    /// let mut output = Vec::new();
    /// Chatbot::builder()
    ///     .store(&store)
    ///     .seed(7)
    ///     .build(Cursor::new("exit\n"), &mut output)
    ///     .unwrap()
    ///     .run()
    ///     .unwrap();
    /// assert!(String::from_utf8(output).unwrap().contains("Goodbye!"));
    /// ```
    pub fn build<R: BufRead, W: Write>(
        self,
        input: R,
        output: W,
    ) -> Result<Session<'s, R, W, StdRng>, ChatbotError> {
        let store = self.store.ok_or_else(|| {
            ChatbotError::BuilderError("No recipe store specified. Use .store()".to_string())
        })?;

        let rng = match self.seed.or(self.config.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Session::new(store, self.config, input, output, rng))
    }
}

/// Main entry point for the builder API
pub struct Chatbot;

impl Chatbot {
    /// Creates a new builder for a chat session
    pub fn builder<'s>() -> ChatbotBuilder<'s> {
        ChatbotBuilder::default()
    }
}
