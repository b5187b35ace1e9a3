//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.DRVIVA_CONFIG` (if present) so static
//! deployments can rename the app or move the session key without rebuilding.
//! Configuration values are public; the shared secret never lives here.

/// Application name shown in the header and on the password card.
pub const DEFAULT_APP_NAME: &str = "Dr. Viva";
/// `localStorage` key holding the session marker.
pub const DEFAULT_SESSION_KEY: &str = "dr_aiva_password_auth";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_name: String,
    pub session_key: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let app_name = option_env!("DRVIVA_APP_NAME").unwrap_or(DEFAULT_APP_NAME);
        let session_key = option_env!("DRVIVA_SESSION_KEY").unwrap_or(DEFAULT_SESSION_KEY);
        let log_level = option_env!("DRVIVA_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            app_name: app_name.to_string(),
            session_key: session_key.to_string(),
            log_level: log_level.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    app_name: Option<String>,
    session_key: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.app_name {
        config.app_name = value;
    }
    if let Some(value) = runtime.session_key {
        config.session_key = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("DRVIVA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        app_name: read_runtime_value(&object, "app_name"),
        session_key: read_runtime_value(&object, "session_key"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
