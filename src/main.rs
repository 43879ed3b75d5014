use log::{info, warn};
use std::env;
use std::io;

use recipe_chatbot::{load_store, Chatbot, ChatbotConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = ChatbotConfig::load()?;

    // Optional dataset path as the only argument
    if let Some(path) = env::args().nth(1) {
        config.dataset_path = path;
    }

    let store = load_store(&config.dataset_path)?;
    if store.is_empty() {
        warn!("{} contains no recipes", config.dataset_path);
    }
    info!("Starting chat with {} recipes", store.len());

    let stdin = io::stdin();
    Chatbot::builder()
        .store(&store)
        .config(config)
        .build(stdin.lock(), io::stdout())?
        .run()?;

    Ok(())
}
