use fx_core::{ThemeConfig, ThemeSettings};
use wasm_bindgen::JsValue;
use web_sys as web;

const SETTINGS_ROOT: &str = "drupalSettings";
const SETTINGS_KEY: &str = "mulhollandDream";

fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut cur = root.clone();
    for key in path {
        cur = js_sys::Reflect::get(&cur, &JsValue::from_str(key)).ok()?;
        if cur.is_undefined() || cur.is_null() {
            return None;
        }
    }
    Some(cur)
}

fn read_settings(window: &web::Window) -> ThemeSettings {
    let Some(raw) = get_path(window, &[SETTINGS_ROOT, SETTINGS_KEY]) else {
        log::debug!("[settings] no {}.{}; using defaults", SETTINGS_ROOT, SETTINGS_KEY);
        return ThemeSettings::default();
    };
    let json = match js_sys::JSON::stringify(&raw) {
        Ok(s) => String::from(s),
        Err(e) => {
            log::warn!("[settings] unserializable settings: {:?}", e);
            return ThemeSettings::default();
        }
    };
    ThemeSettings::from_json(&json).unwrap_or_else(|e| {
        log::warn!("[settings] {}; using defaults", e);
        ThemeSettings::default()
    })
}

/// Resolve the page's theme configuration, falling back to defaults.
pub fn load() -> ThemeConfig {
    let Some(window) = web::window() else {
        return ThemeConfig::default();
    };
    let host_path = get_path(&window, &["Drupal", "theme", "path"]).and_then(|v| v.as_string());
    let cfg = read_settings(&window).resolve(host_path.as_deref());
    log::info!(
        "[settings] base={:?} images={} quotes={} stops={} track={:?}",
        cfg.base_path,
        cfg.images.len(),
        cfg.quotes.len(),
        cfg.gradient.stops().len(),
        cfg.audio.primary
    );
    cfg
}
