//! Controller configuration embedded in the host page

use feeding_controller::AppConfig;

const CONFIG_ELEMENT_ID: &str = "feeding-config";

/// Read the JSON block with id `feeding-config`, falling back to defaults.
///
/// Missing keys take their default values, so the page only needs to list overrides.
pub fn load_config() -> AppConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match text {
        Some(text) => parse_config(&text),
        None => AppConfig::default(),
    }
}

fn parse_config(text: &str) -> AppConfig {
    match serde_json::from_str(text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid embedded config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
