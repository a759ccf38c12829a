//! Page Configuration
//!
//! Element names, class names and timings, optionally overridden by the page.
//! Looked up in order: `window.__PROBLEM_BOARD_CONFIG__`, then a JSON
//! `<script id="problem-board-config">` element, then built-in defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global JS object holding page-provided configuration
pub const CONFIG_GLOBAL: &str = "__PROBLEM_BOARD_CONFIG__";
/// Id of the JSON script element holding page-provided configuration
pub const CONFIG_SCRIPT_ID: &str = "problem-board-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    pub log_level: String,
    pub flash: FlashConfig,
    pub filter: FilterConfig,
    pub sidebar: SidebarConfig,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            flash: FlashConfig::default(),
            filter: FilterConfig::default(),
            sidebar: SidebarConfig::default(),
        }
    }
}

impl EnhanceConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Convert a JS object; missing fields keep their defaults
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Maximum log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.trim().parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    pub selector: String,
    /// Time a notification stays fully visible
    pub delay_ms: u32,
    /// Opacity transition length before removal
    pub fade_ms: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            selector: ".flash".to_string(),
            delay_ms: 4000,
            fade_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub search_input_id: String,
    pub branch_select_id: String,
    pub skill_select_id: String,
    pub card_selector: String,
    pub title_attr: String,
    pub description_attr: String,
    pub branch_attr: String,
    pub skill_attr: String,
    /// `display` value for visible cards
    pub shown_display: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            search_input_id: "searchBox".to_string(),
            branch_select_id: "branchFilter".to_string(),
            skill_select_id: "skillFilter".to_string(),
            card_selector: ".problem-card".to_string(),
            title_attr: "data-title".to_string(),
            description_attr: "data-description".to_string(),
            branch_attr: "data-branch".to_string(),
            skill_attr: "data-skill".to_string(),
            shown_display: "block".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub toggle_id: String,
    pub overlay_id: String,
    pub panel_id: String,
    pub toggle_class: String,
    pub overlay_class: String,
    pub panel_class: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            toggle_id: "sidebarToggle".to_string(),
            overlay_id: "sidebarOverlay".to_string(),
            panel_id: "sidebar".to_string(),
            toggle_class: "active".to_string(),
            overlay_class: "active".to_string(),
            panel_class: "open".to_string(),
        }
    }
}

/// Load configuration from the page.
///
/// Returns the configuration plus a warning describing any source that was
/// present but unreadable; logging is not initialized yet at this point.
pub fn load() -> (EnhanceConfig, Option<String>) {
    let global = web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)).ok())
        .filter(|value| !value.is_undefined() && !value.is_null());
    if let Some(value) = global {
        match EnhanceConfig::from_js(value) {
            Ok(config) => return (config, None),
            Err(e) => return (EnhanceConfig::default(), Some(format!("{}: {}", CONFIG_GLOBAL, e))),
        }
    }

    let script = page_dom::element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content());
    if let Some(text) = script.filter(|text| !text.trim().is_empty()) {
        match EnhanceConfig::from_json(&text) {
            Ok(config) => return (config, None),
            Err(e) => return (EnhanceConfig::default(), Some(format!("#{}: {}", CONFIG_SCRIPT_ID, e))),
        }
    }

    (EnhanceConfig::default(), None)
}
