//! Presentation bundle derived from the active settings.
//!
//! Components never branch on theme/language inline; they ask [`look`] for a
//! [`Look`] and splice its class names into their markup. Physical sides
//! (`left`/`right`) are resolved here so RTL mirroring lives in one place.

use super::settings::{AppSettings, Direction, Language, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Look {
    /// Root wrapper classes (`site site--dark site--rtl`).
    pub root: String,
    pub lang: &'static str,
    pub dir: &'static str,
    /// Physical side where inline content starts.
    pub start: Side,
    /// Physical side where inline content ends.
    pub end: Side,
    /// Chevron icon classes; flipped in RTL so "forward" still points forward.
    pub chevron: &'static str,
    pub surface: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub chip: &'static str,
    pub control: &'static str,
    pub header_scrolled: &'static str,
    pub mobile_menu: &'static str,
    pub field: &'static str,
}

impl Look {
    pub fn for_settings(settings: &AppSettings) -> Self {
        look(settings.theme, settings.language, settings.direction())
    }

    /// Class for an element pinned to the inline-start edge, e.g. `pin-left`.
    pub fn pin_start(&self) -> String {
        format!("pin-{}", self.start.as_str())
    }

    /// Class for an element pinned to the inline-end edge, e.g. `pin-right`.
    pub fn pin_end(&self) -> String {
        format!("pin-{}", self.end.as_str())
    }
}

pub fn look(theme: Theme, language: Language, direction: Direction) -> Look {
    let (start, end) = match direction {
        Direction::Ltr => (Side::Left, Side::Right),
        Direction::Rtl => (Side::Right, Side::Left),
    };

    let theme_mod = match theme {
        Theme::Dark => "site--dark",
        Theme::Light => "site--light",
    };
    let dir_mod = match direction {
        Direction::Ltr => "site--ltr",
        Direction::Rtl => "site--rtl",
    };

    let (surface, heading, body, chip, control, header_scrolled, mobile_menu, field) = match theme
    {
        Theme::Dark => (
            "surface surface--glass-dark",
            "heading heading--on-dark",
            "body-text body-text--on-dark",
            "chip chip--dark",
            "control control--dark",
            "site-header--scrolled site-header--glass-dark",
            "mobile-menu mobile-menu--dark",
            "field field--dark",
        ),
        Theme::Light => (
            "surface surface--glass",
            "heading heading--on-light",
            "body-text body-text--on-light",
            "chip chip--light",
            "control control--light",
            "site-header--scrolled site-header--glass",
            "mobile-menu mobile-menu--light",
            "field field--light",
        ),
    };

    Look {
        root: format!("site {theme_mod} {dir_mod}"),
        lang: language.code(),
        dir: direction.as_attr(),
        start,
        end,
        chevron: if direction.is_rtl() {
            "chevron chevron--flipped"
        } else {
            "chevron"
        },
        surface,
        heading,
        body,
        chip,
        control,
        header_scrolled,
        mobile_menu,
        field,
    }
}
