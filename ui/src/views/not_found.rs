use dioxus::prelude::*;

use crate::core::look::Look;
use crate::core::settings::use_settings;
use crate::t;

/// Shown for unknown paths; anchors always lead back to the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "section not-found",
            h1 { class: look.heading, "404" }
            p { class: look.body, {t!(language, "not-found-body")} }
            code { class: "not-found__path", dir: "ltr", "{path}" }
            a { class: "button button--primary", href: "/", {t!(language, "not-found-home")} }
        }
    }
}
