use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use super::RecipeStore;
use crate::error::{ChatbotError, Result};
use crate::model::Recipe;

/// Loads a recipe dataset from disk and cleans it into a [`RecipeStore`].
///
/// The format is picked from the file extension: `.csv` files need a header
/// row with at least `recipe_name`, `.json` files hold an array of records.
/// Unknown columns are ignored.
pub fn load_store(path: impl AsRef<Path>) -> Result<RecipeStore> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let records = match extension.as_str() {
        "csv" => read_csv(File::open(path)?)?,
        "json" => read_json(File::open(path)?)?,
        _ => {
            return Err(ChatbotError::UnsupportedFormat(format!(
                "{} (expected .csv or .json)",
                path.display()
            )))
        }
    };

    let raw_count = records.len();
    let store = RecipeStore::from_records(records);
    if store.len() < raw_count {
        debug!("Dropped {} rows without a recipe name", raw_count - store.len());
    }
    info!("Loaded {} recipes from {}", store.len(), path.display());

    Ok(store)
}

fn read_csv(reader: impl Read) -> Result<Vec<Recipe>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in reader.deserialize::<Recipe>() {
        records.push(row?);
    }
    Ok(records)
}

fn read_json(reader: impl Read) -> Result<Vec<Recipe>> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}
