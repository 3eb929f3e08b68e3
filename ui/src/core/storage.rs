//! Local persistence for user preferences (language + theme).
//!
//! - Web: `localStorage` under [`PREFERENCES_KEY`].
//! - Desktop: `preferences.json` in the platform config directory.
//!
//! Failures are logged and swallowed; callers fall back to defaults.

use dioxus::logger::tracing::warn;

use super::settings::AppSettings;

pub const PREFERENCES_KEY: &str = "bluecode.preferences";

pub fn load_preferences() -> Option<AppSettings> {
    let raw = read_raw()?;
    match decode(&raw) {
        Ok(settings) => Some(settings),
        Err(err) => {
            warn!("ignoring unreadable preferences: {err}");
            None
        }
    }
}

pub fn save_preferences(settings: &AppSettings) {
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if let Err(err) = write_raw(&raw) {
                warn!("failed to persist preferences: {err}");
            }
        }
        Err(err) => warn!("failed to encode preferences: {err}"),
    }
}

fn decode(raw: &str) -> Result<AppSettings, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Option<String> {
    local_storage()?.get_item(PREFERENCES_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_raw(raw: &str) -> Result<(), String> {
    let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
    storage
        .set_item(PREFERENCES_KEY, raw)
        .map_err(|err| format!("{err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn preferences_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "BlueCode", "bluecode")
        .map(|dirs| dirs.config_dir().join("preferences.json"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Option<String> {
    std::fs::read_to_string(preferences_path()?).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(raw: &str) -> Result<(), String> {
    let path = preferences_path().ok_or_else(|| "no config directory".to_string())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    std::fs::write(&path, raw).map_err(|err| format!("{}: {err}", path.display()))
}
