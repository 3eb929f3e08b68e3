//! Fixed top bar: brand, section links, theme/language toggles and the CTA,
//! plus the full-screen menu used on narrow viewports.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::config::HEADER_SCROLL_THRESHOLD_PX;
use crate::core::look::Look;
use crate::core::settings::use_settings;
use crate::t;

use super::anchors::Anchor;
use super::brand::Brand;

/// The header switches to its compact, glassy style past this offset.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > HEADER_SCROLL_THRESHOLD_PX
}

// Reports `window.scrollY` now and on every scroll.
const SCROLL_WATCH_JS: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener('scroll', report, { passive: true });
    report();
"#;

fn body_lock_js(locked: bool) -> &'static str {
    if locked {
        "document.body.style.overflow = 'hidden';"
    } else {
        "document.body.style.overflow = '';"
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let mut settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    let mut scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    use_future(move || async move {
        let mut watcher = document::eval(SCROLL_WATCH_JS);
        loop {
            match watcher.recv::<f64>().await {
                Ok(offset) => {
                    let next = is_scrolled(offset);
                    if *scrolled.peek() != next {
                        scrolled.set(next);
                    }
                }
                Err(err) => {
                    debug!("scroll watcher stopped: {err:?}");
                    break;
                }
            }
        }
    });

    use_effect(move || {
        let _ = document::eval(body_lock_js(menu_open()));
    });

    let header_class = if scrolled() {
        format!("site-header {}", look.header_scrolled)
    } else {
        "site-header site-header--top".to_string()
    };
    let theme_icon = if current.theme.is_dark() { "☀" } else { "☾" };
    let switch_to = language.toggled().native_name();
    let is_open = menu_open();
    let menu_class = if is_open {
        format!("{} mobile-menu--open", look.mobile_menu)
    } else {
        look.mobile_menu.to_string()
    };

    rsx! {
        header { class: header_class,
            div { class: "site-header__inner",
                Brand {}

                nav { class: "site-header__links",
                    for anchor in Anchor::ALL {
                        a { key: "{anchor.id()}", class: "site-header__link {look.body}", href: anchor.href(),
                            {anchor.label(language)}
                        }
                    }
                }

                div { class: "site-header__controls",
                    button {
                        r#type: "button",
                        class: "icon-button {look.control}",
                        aria_label: t!(language, "nav-toggle-theme"),
                        onclick: move |_| settings.with_mut(|s| s.toggle_theme()),
                        "{theme_icon}"
                    }
                    button {
                        r#type: "button",
                        class: "pill-button {look.control}",
                        lang: language.toggled().code(),
                        onclick: move |_| settings.with_mut(|s| s.toggle_language()),
                        span { aria_hidden: "true", "🌐 " }
                        "{switch_to}"
                    }
                    a { class: "button button--primary button--small", href: "#contact",
                        {t!(language, "nav-cta")}
                    }
                }

                button {
                    r#type: "button",
                    class: "site-header__burger {look.control}",
                    aria_label: t!(language, "nav-open-menu"),
                    aria_expanded: "{is_open}",
                    onclick: move |_| menu_open.set(true),
                    "☰"
                }
            }
        }

        div { class: menu_class, aria_hidden: "{!is_open}",
            button {
                r#type: "button",
                class: "mobile-menu__close {look.pin_end()}",
                aria_label: t!(language, "nav-close-menu"),
                onclick: move |_| menu_open.set(false),
                "✕"
            }
            nav { class: "mobile-menu__links",
                for anchor in Anchor::ALL {
                    a {
                        key: "{anchor.id()}",
                        class: "mobile-menu__link",
                        href: anchor.href(),
                        onclick: move |_| menu_open.set(false),
                        {anchor.label(language)}
                    }
                }
                div { class: "mobile-menu__rule" }
                div { class: "mobile-menu__controls",
                    button {
                        r#type: "button",
                        class: "icon-button icon-button--large",
                        aria_label: t!(language, "nav-toggle-theme"),
                        onclick: move |_| settings.with_mut(|s| s.toggle_theme()),
                        "{theme_icon}"
                    }
                    button {
                        r#type: "button",
                        class: "pill-button pill-button--large",
                        onclick: move |_| {
                            settings.with_mut(|s| s.toggle_language());
                            menu_open.set(false);
                        },
                        "🌐 {switch_to}"
                    }
                }
                a {
                    class: "button button--primary button--large",
                    href: "#contact",
                    onclick: move |_| menu_open.set(false),
                    {t!(language, "nav-cta")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_style_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(800.0));
    }

    #[test]
    fn body_lock_follows_menu_state() {
        assert!(body_lock_js(true).contains("hidden"));
        assert!(!body_lock_js(false).contains("hidden"));
    }
}
