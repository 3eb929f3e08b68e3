use dioxus::prelude::*;

use crate::core::config;
use crate::core::look::Look;
use crate::core::settings::use_settings;
use crate::t;

use super::anchors::Anchor;
use super::brand::Brand;

/// (name, glyph, href)
const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("Instagram", "◎", config::INSTAGRAM_HREF),
    ("Facebook", "f", config::FACEBOOK_HREF),
    ("WhatsApp", "✆", config::WHATSAPP_HREF),
];

#[component]
pub fn SiteFooter() -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__top",
                div { class: "site-footer__about",
                    Brand { class: "brand--small" }
                    p { class: look.body, {t!(language, "footer-description")} }
                    div { class: "site-footer__social",
                        for (name, glyph, href) in SOCIAL_LINKS {
                            a {
                                key: "{name}",
                                class: "social-link {look.control}",
                                href: href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: name,
                                "{glyph}"
                            }
                        }
                    }
                }

                div { class: "site-footer__links",
                    h4 { class: "site-footer__heading", {t!(language, "footer-links")} }
                    ul {
                        for anchor in Anchor::ALL {
                            li { key: "{anchor.id()}",
                                a { class: "site-footer__link", href: anchor.href(),
                                    span { class: "site-footer__dot", aria_hidden: "true" }
                                    {anchor.label(language)}
                                }
                            }
                        }
                    }
                }
            }

            div { class: "site-footer__bottom",
                p { {t!(language, "footer-rights")} }
                div { class: "site-footer__tags",
                    span { {t!(language, "footer-powered")} }
                    span { {t!(language, "footer-est")} }
                }
            }
        }
    }
}
