use dioxus::prelude::*;

use crate::contact::{service_title, Service};
use crate::core::look::Look;
use crate::core::settings::{use_settings, Language};
use crate::t;

fn glyph(service: Service) -> &'static str {
    match service {
        Service::Web => "▦",
        Service::Student => "🎓",
        Service::Consulting => "⌬",
        Service::UiUx => "◐",
        Service::Maintenance => "⛨",
        Service::AiAgents => "⚙",
    }
}

fn description(language: Language, service: Service) -> String {
    match service {
        Service::Web => t!(language, "service-web-desc"),
        Service::Student => t!(language, "service-student-desc"),
        Service::Consulting => t!(language, "service-consulting-desc"),
        Service::UiUx => t!(language, "service-uiux-desc"),
        Service::Maintenance => t!(language, "service-maintenance-desc"),
        Service::AiAgents => t!(language, "service-ai-agents-desc"),
    }
}

#[component]
pub fn Services() -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    rsx! {
        section { id: "services", class: "section services",
            div { class: "section__intro section__intro--center",
                h2 { class: look.heading, {t!(language, "services-title")} }
                p { class: look.body, {t!(language, "services-subtitle")} }
            }
            div { class: "services__grid",
                for service in Service::ALL {
                    article { key: "{service.key()}", class: "service-card {look.surface}",
                        div { class: "service-card__icon", aria_hidden: "true", {glyph(service)} }
                        h3 { class: look.heading, {service_title(language, service)} }
                        p { class: look.body, {description(language, service)} }
                    }
                }
            }
        }
    }
}
