use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the chatbot
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatbotConfig {
    /// Path to the recipe dataset (`.csv` or `.json`)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// Minimum rating a recipe needs to be suggested as "highly rated"
    #[serde(default = "default_high_rating_threshold")]
    pub high_rating_threshold: f64,
    /// Go back to the main menu after a mode finishes instead of exiting
    #[serde(default)]
    pub return_to_menu: bool,
    /// Re-prompt on unrecognised answers instead of leaving the mode
    #[serde(default)]
    pub strict_commands: bool,
    /// Seed for the random generator, for reproducible suggestions
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            high_rating_threshold: default_high_rating_threshold(),
            return_to_menu: false,
            strict_commands: false,
            seed: None,
        }
    }
}

// Default value functions
fn default_dataset_path() -> String {
    "data/recipes.csv".to_string()
}

fn default_high_rating_threshold() -> f64 {
    4.8
}

impl ChatbotConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Rejects a `high_rating_threshold` outside `[0, 5]` (or NaN).
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(0.0..=5.0).contains(&self.high_rating_threshold) {
            return Err(ConfigError::Message(format!(
                "high_rating_threshold must be between 0 and 5, got {}",
                self.high_rating_threshold
            )));
        }
        Ok(self)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_CHATBOT__ prefix
/// 2. chatbot.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_CHATBOT__DATASET_PATH
pub fn load_config() -> Result<ChatbotConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("chatbot").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_CHATBOT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<ChatbotConfig>()?.validate()
}
