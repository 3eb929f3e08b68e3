//! Internationalization (i18n) support for `bluecode-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/bluecode-ui.ftl   (fallback/reference)
//!   ar/bluecode-ui.ftl      (Arabic, right-to-left)
//! ```
//!
//! Unlike a single global loader that gets re-pointed at runtime, every site
//! language owns its own `FluentLanguageLoader`. Lookups name the language
//! explicitly, so the active language is plain data flowing from the settings
//! context:
//! ```ignore
//! let lang = use_settings()().language;
//! let home_label = t!(lang, "nav-home");
//! ```
//!
//! To add a message:
//! 1. Add the key to `en-US/bluecode-ui.ftl`.
//! 2. Add the translated key to every other locale (tests enforce this).
//!
//! Platform notes:
//! - Desktop: `DesktopLanguageRequester` (OS locale list) picks the first-run language.
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` in the target-specific dependency section).
use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::settings::Language;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Translation lookup for an explicit site language.
/// Examples:
///     t!(lang, "nav-home")
///     t!(Language::Ar, "hero-title")
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "bluecode-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static EN_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::En));
static AR_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Ar));

fn fallback_language() -> LanguageIdentifier {
    Language::En.lang_id()
}

fn build_loader(language: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
    // Arabic strings embed Latin brand names; isolation marks would show up
    // as stray glyphs in some webviews.
    loader.set_use_isolating(false);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[language.lang_id()]) {
        warn!(
            "[i18n] failed selecting {} ({err}); continuing with fallback",
            language.locale_tag()
        );
    }
    loader
}

/// Loader for `language`, built on first use.
pub fn loader(language: Language) -> &'static FluentLanguageLoader {
    match language {
        Language::En => &EN_LOADER,
        Language::Ar => &AR_LOADER,
    }
}

/// Force both bundles to load (cheap; idempotent). Called at startup so the
/// first language switch does not pay the parse cost.
pub fn init() {
    Lazy::force(&EN_LOADER);
    Lazy::force(&AR_LOADER);
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Languages the user agent (browser or OS) asks for, most preferred first.
#[cfg(target_arch = "wasm32")]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

/// Languages the user agent (browser or OS) asks for, most preferred first.
#[cfg(not(target_arch = "wasm32"))]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
