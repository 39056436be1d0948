use httpmock::prelude::*;
use neuro_menu::core::defaults::default_menu;
use neuro_menu::core::engine::{HTML_FILE, LAYOUT_FILE, MENU_FILE};
use neuro_menu::domain::model::Theme;
use neuro_menu::utils::error::GENERATION_FAILED_MESSAGE;
use neuro_menu::{GeminiProvider, LocalStorage, MenuEngine, MenuState, TomlConfig};
use serde_json::json;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn config_for(server: &MockServer, output_path: &str, heatmap: bool) -> TomlConfig {
    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
[provider]
endpoint = "{}"
api_key = "test-key"
timeout_seconds = 5

[output]
output_path = "{}"
output_formats = ["html", "json"]

[layout]
heatmap = {}
"#,
        server.url("/v1beta"),
        output_path.replace('\\', "/"),
        heatmap
    )
    .unwrap();

    TomlConfig::from_file(config_file.path()).unwrap()
}

fn generated_menu() -> serde_json::Value {
    json!({
        "restaurantName": "Trattoria Luce",
        "tagline": "Cucina di casa",
        "dishes": [
            {"id": 1, "name": "Bruschetta", "description": "Tomato", "price": "450₽", "category": "starter"},
            {"id": 2, "name": "Vitello", "description": "Tonnato", "price": "900₽", "category": "starter"},
            {"id": 3, "name": "Ossobuco", "description": "Milanese", "price": "2900₽", "category": "special", "highlight": true},
            {"id": 4, "name": "Carbonara", "description": "Guanciale", "price": "990₽", "category": "main"},
            {"id": 5, "name": "Lasagna", "description": "Bolognese", "price": "1100₽", "category": "main"},
            {"id": 6, "name": "Risotto", "description": "Saffron", "price": "1200₽", "category": "main"},
            {"id": 7, "name": "Branzino", "description": "Lemon", "price": "1700₽", "category": "main"},
            {"id": 8, "name": "Saltimbocca", "description": "Sage", "price": "1500₽", "category": "main"},
            {"id": 9, "name": "Tiramisu", "description": "Mascarpone", "price": "600₽", "category": "dessert"},
            {"id": 10, "name": "Panna Cotta", "description": "Berries", "price": "550₽", "category": "dessert"}
        ]
    })
}

fn section_ids(layout: &serde_json::Value, section: &str) -> Vec<i64> {
    layout["placements"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["section"] == section)
        .map(|p| p["dish"]["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_end_to_end_generation_writes_all_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent");
        then.status(200).json_body(json!({
            "candidates": [{"content": {"parts": [{"text": generated_menu().to_string()}]}}]
        }));
    });

    let config = config_for(&server, &output_path, true);
    let provider = GeminiProvider::new(&config.provider).unwrap();
    let engine = MenuEngine::new(provider, LocalStorage::new(output_path.clone()), config);
    let mut state = MenuState::default();

    let outcome = engine.run(&mut state, Theme::ItalianClassic).await.unwrap();

    api_mock.assert();
    assert!(outcome.generation_error.is_none());
    assert_eq!(outcome.outputs.len(), 3);
    assert_eq!(state.current().restaurant_name, "Trattoria Luce");

    let html = std::fs::read_to_string(temp_dir.path().join(HTML_FILE)).unwrap();
    assert!(html.contains("Trattoria Luce"));
    assert!(html.contains("data-zone=\"The Magnet\""));

    let layout: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join(LAYOUT_FILE)).unwrap()).unwrap();
    assert_eq!(section_ids(&layout, "lead"), vec![1, 2]);
    assert_eq!(section_ids(&layout, "standard"), vec![4, 5, 6]);
    assert_eq!(section_ids(&layout, "magnet"), vec![7, 8]);
    assert_eq!(section_ids(&layout, "anchor"), vec![3]);
    assert_eq!(section_ids(&layout, "desserts"), vec![9, 10]);
    assert_eq!(layout["dropped"], json!([]));

    let saved = engine.load_saved_menu().await.unwrap().unwrap();
    assert_eq!(saved, *state.current());
}

#[tokio::test]
async fn test_failed_generation_keeps_and_renders_previous_menu() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent");
        then.status(500).body("upstream unavailable");
    });

    let config = config_for(&server, &output_path, false);
    let provider = GeminiProvider::new(&config.provider).unwrap();
    let engine = MenuEngine::new(provider, LocalStorage::new(output_path), config);
    let mut state = MenuState::default();

    let outcome = engine.run(&mut state, Theme::ModernRussian).await.unwrap();

    api_mock.assert();
    let err = outcome.generation_error.expect("generation should fail");
    assert_eq!(err.user_friendly_message(), GENERATION_FAILED_MESSAGE);
    assert_eq!(state.current(), &default_menu());
    assert_eq!(state.last_error(), Some(GENERATION_FAILED_MESSAGE));

    let saved = std::fs::read(temp_dir.path().join(MENU_FILE)).unwrap();
    let saved: serde_json::Value = serde_json::from_slice(&saved).unwrap();
    assert_eq!(saved["restaurantName"], "L'Harmonie");
}

#[tokio::test]
async fn test_publish_without_generation() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let server = MockServer::start();

    let config = config_for(&server, &output_path, false);
    let provider = GeminiProvider::new(&config.provider).unwrap();
    let engine = MenuEngine::new(provider, LocalStorage::new(output_path), config);

    let outputs = engine.publish(&MenuState::default()).await.unwrap();

    assert_eq!(outputs.len(), 3);
    assert!(temp_dir.path().join(HTML_FILE).exists());
}
