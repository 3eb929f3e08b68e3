//! Root wrapper installed as the router layout by each platform crate.

use dioxus::prelude::*;

use crate::components::FloatingContact;
use crate::core::look::Look;
use crate::core::settings::use_settings_provider;

/// Script mirroring language and theme onto `<html>`, so the scrollbar and
/// anything outside the Dioxus root follow them too.
fn document_attrs_js(lang: &str, dir: &str, dark: bool) -> String {
    format!(
        "document.documentElement.lang = '{lang}'; \
         document.documentElement.dir = '{dir}'; \
         document.documentElement.classList.toggle('dark', {dark});"
    )
}

/// Provides the settings context and applies the active look to the whole page.
#[component]
pub fn SiteShell(children: Element) -> Element {
    let settings = use_settings_provider();

    use_effect(move || {
        let current = settings();
        let js = document_attrs_js(
            current.language.code(),
            current.direction().as_attr(),
            current.theme.is_dark(),
        );
        let _ = document::eval(&js);
    });

    let look = Look::for_settings(&settings());

    rsx! {
        div { class: "{look.root}", lang: look.lang, dir: look.dir,
            {children}
            FloatingContact {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_script_sets_direction_and_theme() {
        let js = document_attrs_js("ar", "rtl", false);
        assert!(js.contains("lang = 'ar'"));
        assert!(js.contains("dir = 'rtl'"));
        assert!(js.contains("toggle('dark', false)"));
    }
}
