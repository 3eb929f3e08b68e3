use dioxus::prelude::*;

use crate::core::config::WHATSAPP_HREF;
use crate::core::look::Look;
use crate::core::settings::use_settings;

/// Floating WhatsApp shortcut pinned to the inline-end bottom corner.
#[component]
pub fn FloatingContact() -> Element {
    let settings = use_settings();
    let look = Look::for_settings(&settings());

    rsx! {
        a {
            class: "floating-contact {look.pin_end()}",
            href: WHATSAPP_HREF,
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "WhatsApp",
            span { class: "floating-contact__label", "WhatsApp" }
            span { class: "floating-contact__bubble", aria_hidden: "true", "✆" }
        }
    }
}
