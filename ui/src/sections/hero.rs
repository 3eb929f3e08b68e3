use dioxus::prelude::*;

use crate::core::config::TYPEWRITER_STEP_MS;
use crate::core::look::Look;
use crate::core::settings::use_settings;
use crate::core::timing::sleep_ms;
use crate::t;

/// Progressive reveal of a headline, one character per tick.
///
/// Counts `char`s, not bytes, so a partially typed Arabic headline is always
/// valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Typewriter {
    text: String,
    shown: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            shown: 0,
            total: text.chars().count(),
        }
    }

    /// Reveal one more character. Returns `false` once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.shown >= self.total {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }
}

/// `#home`: badge, typed headline, subtitle, calls to action and stats.
#[component]
pub fn Hero() -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    let mut typed = use_signal(Typewriter::default);

    // Re-runs (and cancels the previous run) whenever the language changes.
    let _typing = use_resource(move || {
        let headline = t!(settings().language, "hero-title");
        async move {
            typed.set(Typewriter::new(&headline));
            loop {
                sleep_ms(TYPEWRITER_STEP_MS).await;
                if !typed.with_mut(|tw| tw.tick()) {
                    break;
                }
            }
        }
    });

    let typing = typed();

    rsx! {
        section { id: "home", class: "section hero",
            div { class: "hero__glow {look.pin_start()}", aria_hidden: "true" }

            div { class: "hero__content",
                span { class: "hero__badge {look.chip}", "✦ " {t!(language, "hero-badge")} }

                h1 { class: "hero__title {look.heading}",
                    span { "{typing.visible()}" }
                    span {
                        class: if typing.is_done() { "hero__caret hero__caret--idle" } else { "hero__caret" },
                        aria_hidden: "true",
                    }
                }

                p { class: "hero__subtitle {look.body}", {t!(language, "hero-subtitle")} }

                div { class: "hero__actions",
                    a { class: "button button--primary", href: "#contact",
                        {t!(language, "hero-cta-primary")}
                        span { class: look.chevron, "›" }
                    }
                    a { class: "button button--ghost {look.control}", href: "#portfolio",
                        {t!(language, "hero-cta-secondary")}
                    }
                }
            }

            div { class: "hero__stats",
                div { class: "stat",
                    strong { class: look.heading, "24/7" }
                    span { {t!(language, "hero-stat-support")} }
                }
                div { class: "stat__divider" }
                div { class: "stat",
                    strong { class: look.heading, "+100" }
                    span { {t!(language, "hero-stat-solutions")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::new("Code");
        assert_eq!(tw.visible(), "");
        tw.tick();
        assert_eq!(tw.visible(), "C");
        while tw.tick() {}
        assert_eq!(tw.visible(), "Code");
        assert!(tw.is_done());
        assert!(!tw.tick());
    }

    #[test]
    fn never_splits_multibyte_characters() {
        let headline = "نبني المستقبل";
        let mut tw = Typewriter::new(headline);
        let mut steps = 0;
        while tw.tick() {
            steps += 1;
            let shown = tw.visible();
            assert!(headline.starts_with(shown));
            assert_eq!(shown.chars().count(), steps);
        }
        assert_eq!(steps, headline.chars().count());
        assert_eq!(tw.visible(), headline);
    }

    #[test]
    fn restarting_starts_from_empty() {
        let mut tw = Typewriter::new("Hello");
        tw.tick();
        tw.tick();
        tw = Typewriter::new("مرحبا");
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_done());
    }

    #[test]
    fn empty_text_is_immediately_done() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "");
    }
}
