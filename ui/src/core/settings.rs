//! Site-wide settings (language + theme) shared through a Dioxus context.
//!
//! The root component calls [`use_settings_provider`] once; every descendant
//! reads the same `Signal<AppSettings>` through [`use_settings`]. Updates only
//! happen in response to discrete user actions (theme toggle, language toggle)
//! and are persisted through [`crate::core::storage`].

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::core::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Short code used for the `lang` attribute and persisted preferences.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Folder name of the Fluent bundle for this language.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Ar => "ar",
        }
    }

    pub fn lang_id(self) -> LanguageIdentifier {
        self.locale_tag()
            .parse()
            .expect("site locale tags are valid language identifiers")
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Name of the language written in itself (used by the switcher, which
    /// always shows the language you would switch *to*).
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Best-effort match of a BCP 47 tag (`ar-EG`, `en`, ...) to a site language.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
}

impl AppSettings {
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Startup resolution: persisted preference, then the browser/OS
    /// language list, then defaults.
    pub fn initial() -> Self {
        if let Some(saved) = storage::load_preferences() {
            return saved;
        }
        let language = crate::i18n::requested_languages()
            .iter()
            .find_map(|id| Language::from_tag(&id.to_string()))
            .unwrap_or_default();
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}

/// Install the settings context. Call once from the root component.
pub fn use_settings_provider() -> Signal<AppSettings> {
    let settings = use_context_provider(|| Signal::new(AppSettings::initial()));

    // Runs once with the startup value, then on every toggle.
    use_effect(move || {
        let current = settings();
        debug!(
            language = current.language.code(),
            theme = current.theme.as_str(),
            "settings changed"
        );
        storage::save_preferences(&current);
    });

    settings
}

/// Read the settings context provided by [`use_settings_provider`].
pub fn use_settings() -> Signal<AppSettings> {
    use_context::<Signal<AppSettings>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn direction_is_rtl_only_for_arabic() {
        assert!(Language::Ar.direction().is_rtl());
        assert!(!Language::En.direction().is_rtl());
        assert_eq!(Language::Ar.direction().as_attr(), "rtl");
    }

    #[test]
    fn from_tag_matches_primary_subtag() {
        assert_eq!(Language::from_tag("ar-EG"), Some(Language::Ar));
        assert_eq!(Language::from_tag("en_GB"), Some(Language::En));
        assert_eq!(Language::from_tag("AR"), Some(Language::Ar));
        assert_eq!(Language::from_tag("fr-FR"), None);
    }

    #[test]
    fn defaults_match_site_launch_state() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn toggles_flip_only_their_field() {
        let mut settings = AppSettings::default();
        settings.toggle_theme();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::En);
        settings.toggle_language();
        assert_eq!(settings.language, Language::Ar);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn preferences_deserialize_with_missing_fields() {
        let parsed: AppSettings = serde_json::from_str(r#"{"language":"ar"}"#).unwrap();
        assert_eq!(parsed.language, Language::Ar);
        assert_eq!(parsed.theme, Theme::Dark);
    }
}
