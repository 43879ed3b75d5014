use recipe_chatbot::{load_store, ChatbotError};
use std::io::Write;
use tempfile::Builder;

fn write_dataset(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_food_com_csv() {
    let file = write_dataset(
        ".csv",
        "\
,recipe_name,prep_time,cook_time,total_time,servings,ingredients,directions,rating,url,cuisine_path
0,Apple Pie,30 mins,1 hr,1 hr 30 mins,8,\"8 small Granny Smith apples, 1 cup sugar\",\"Peel and core apples. \n\n\n   Bake for 1 hour.\",4.8,https://example.com/apple-pie,/Desserts/Pies/Apple Pie Recipes/
1,Quick Salad,,,,2,\"lettuce, tomato\",Toss.,,https://example.com/salad,/Salad/Green Salads/
2,,,,,,,,,,
",
    );

    let store = load_store(file.path()).unwrap();
    assert_eq!(store.len(), 2);

    let pie = store.get(0).unwrap();
    assert_eq!(pie.name, "Apple Pie");
    assert_eq!(pie.directions, "Peel and core apples.\nBake for 1 hour.");
    assert_eq!(pie.minutes().unwrap(), 90);
    assert_eq!(pie.rating, Some(4.8));
    assert_eq!(pie.cuisine_path, "/Desserts/Pies/Apple Pie Recipes/");

    let salad = store.get(1).unwrap();
    assert_eq!(salad.total_time, "0 mins");
    assert!(salad.rating.is_none());
}

#[test]
fn test_load_json_array() {
    let file = write_dataset(
        ".JSON",
        r#"[
            {"recipe_name": "Miso Soup", "ingredients": "miso, tofu", "directions": "Simmer.",
             "total_time": "15 mins", "rating": 4.6, "cuisine_path": "/World Cuisine/Asian/Japanese/"},
            {"name": "Toast"}
        ]"#,
    );

    let store = load_store(file.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0).unwrap().minutes().unwrap(), 15);
    assert_eq!(store.get(1).unwrap().total_time, "0 mins");
}

#[test]
fn test_load_json_with_null_cells() {
    let file = write_dataset(
        ".json",
        r#"[{"recipe_name": "Oats", "ingredients": null, "directions": "Soak.",
             "total_time": null, "rating": null, "cuisine_path": "/Breakfast/"}]"#,
    );

    let store = load_store(file.path()).unwrap();
    let oats = store.get(0).unwrap();
    assert_eq!(oats.total_time, "0 mins");
    assert_eq!(oats.minutes().unwrap(), 0);
    assert!(oats.ingredients.is_empty());
    assert!(oats.rating.is_none());
}

#[test]
fn test_malformed_json() {
    let file = write_dataset(".json", "{not json");
    let err = load_store(file.path()).unwrap_err();
    assert!(matches!(err, ChatbotError::JsonError(_)));
}

#[test]
fn test_unsupported_extension() {
    let file = write_dataset(".txt", "recipe_name\nToast\n");
    let err = load_store(file.path()).unwrap_err();
    assert!(matches!(err, ChatbotError::UnsupportedFormat(_)));
}

#[test]
fn test_bundled_sample_dataset() {
    let store = load_store(concat!(env!("CARGO_MANIFEST_DIR"), "/data/recipes.csv")).unwrap();
    assert_eq!(store.len(), 7);

    let oats = store.iter().find(|r| r.name == "Overnight Oats").unwrap();
    assert_eq!(oats.total_time, "0 mins");
    assert_eq!(oats.directions, "Stir everything together in a jar.\nRefrigerate overnight.");

    let eggs = store.iter().find(|r| r.name == "Quick Scrambled Eggs").unwrap();
    assert!(eggs.rating.is_none());

    assert!(store.iter().all(|r| r.minutes().is_ok()));
}
