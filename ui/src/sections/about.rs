use dioxus::prelude::*;

use crate::core::look::Look;
use crate::core::settings::use_settings;
use crate::t;

/// Technologies listed on the vision card. Brand names, not translated.
pub const TECH_STACK: [&str; 5] = ["React / Next.js", "Node.js", "SQL / NoSQL", "AI Agents", "Tailwind"];

/// `#about`: the "engineering DNA" bento grid.
#[component]
pub fn About() -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    rsx! {
        section { id: "about", class: "section about",
            div { class: "section__intro section__intro--center",
                h2 { class: look.heading, {t!(language, "about-dna-title")} }
                p { class: look.body, {t!(language, "about-dna-subtitle")} }
            }

            div { class: "bento",
                article { class: "bento__card bento__card--wide {look.surface}",
                    span { class: "bento__eyebrow", {t!(language, "about-vision-badge")} }
                    h3 { class: look.heading, {t!(language, "about-title")} }
                    p { class: look.body, {t!(language, "about-content")} }
                    ul { class: "bento__stack",
                        for tech in TECH_STACK {
                            li { key: "{tech}", class: look.chip, "{tech}" }
                        }
                    }
                }

                article { class: "bento__card bento__card--narrow bento__card--centered {look.surface}",
                    div { class: "bento__icon", aria_hidden: "true", "↗" }
                    h4 { class: look.heading, {t!(language, "about-speed-title")} }
                    p { class: "bento__caption", {t!(language, "about-speed-caption")} }
                }

                article { class: "bento__card bento__card--five {look.surface}",
                    h4 { class: look.heading, {t!(language, "about-innovation-title")} }
                    p { class: look.body, {t!(language, "about-innovation-body")} }
                }

                article { class: "bento__card bento__card--seven {look.surface}",
                    div {
                        h4 { class: look.heading, {t!(language, "about-quality-title")} }
                        p { class: look.body, {t!(language, "about-quality-body")} }
                    }
                    div { class: "bento__grade", aria_hidden: "true", "A+" }
                }
            }
        }
    }
}
