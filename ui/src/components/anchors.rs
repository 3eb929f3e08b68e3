//! In-page navigation targets shared by the header and the footer.

use crate::core::settings::Language;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    Services,
    Portfolio,
    About,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::Services,
        Anchor::Portfolio,
        Anchor::About,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Services => "services",
            Anchor::Portfolio => "portfolio",
            Anchor::About => "about",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self, language: Language) -> String {
        match self {
            Anchor::Home => t!(language, "nav-home"),
            Anchor::Services => t!(language, "nav-services"),
            Anchor::Portfolio => t!(language, "nav-portfolio"),
            Anchor::About => t!(language, "nav-about"),
            Anchor::Contact => t!(language, "nav-contact"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_point_at_section_ids() {
        let hrefs: Vec<String> = Anchor::ALL.iter().map(|a| a.href()).collect();
        assert_eq!(
            hrefs,
            ["#home", "#services", "#portfolio", "#about", "#contact"]
        );
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(Anchor::Home.label(Language::En), "Home");
        assert_ne!(
            Anchor::Contact.label(Language::En),
            Anchor::Contact.label(Language::Ar)
        );
    }
}
