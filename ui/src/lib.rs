//! Shared UI crate for the Blue Code site. Every page section, the portfolio
//! gallery and all pure state live here; `web` and `desktop` only launch it.

pub mod components;
pub mod contact;
pub mod core;
pub mod gallery;
pub mod i18n;
pub mod portfolio;
pub mod sections;
pub mod views;


use dioxus::prelude::*;

/// Site stylesheet (bundled by the web build).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The same stylesheet as text, for platforms that inline it.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
