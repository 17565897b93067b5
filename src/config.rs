//! Assistant Configuration
//!
//! Popup text and runtime settings handed to the assistant SDK. Defaults can
//! be overridden per page through `window.__FAMILY_TODO_CONFIG__`.

use serde::{Deserialize, Serialize};

/// Global the page may define to override [`AssistantConfig`] fields
pub const CONFIG_GLOBAL: &str = "__FAMILY_TODO_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssistantConfig {
    /// Endpoint of the assistant backend runtime
    pub runtime_url: String,
    pub instructions: String,
    pub labels: PopupLabels,
    pub default_open: bool,
    pub click_outside_to_close: bool,
    /// Label under which the list snapshot is shared with the assistant
    pub readable_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupLabels {
    pub title: String,
    pub initial: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            runtime_url: "/api/copilotkit".to_string(),
            instructions: "Help the user manage a todo list. If the user provides a high level goal, \
                           break it down into a few specific tasks and add them to the list"
                .to_string(),
            labels: PopupLabels::default(),
            default_open: true,
            click_outside_to_close: false,
            readable_description: "The current to-do list.".to_string(),
        }
    }
}

impl Default for PopupLabels {
    fn default() -> Self {
        Self {
            title: "具體的方法指示".to_string(),
            initial: "👋 在這裡提問題，卡緊..呵呵".to_string(),
        }
    }
}

/// Read overrides from the page, falling back to defaults
#[cfg(target_arch = "wasm32")]
pub fn load() -> AssistantConfig {
    let Some(window) = web_sys::window() else {
        return AssistantConfig::default();
    };
    let raw = match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => return AssistantConfig::default(),
    };
    match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[CONFIG] ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            AssistantConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> AssistantConfig {
    AssistantConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.runtime_url, "/api/copilotkit");
        assert!(config.default_open);
        assert!(!config.click_outside_to_close);
        assert_eq!(config.labels.title, "具體的方法指示");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AssistantConfig = serde_json::from_str(
            r#"{"runtimeUrl": "https://example.test/agent", "labels": {"title": "Helper"}}"#,
        )
        .unwrap();
        assert_eq!(config.runtime_url, "https://example.test/agent");
        assert_eq!(config.labels.title, "Helper");
        assert_eq!(config.labels.initial, PopupLabels::default().initial);
        assert!(config.default_open);
    }

    #[test]
    fn test_load_outside_browser_is_default() {
        assert_eq!(load(), AssistantConfig::default());
    }
}
