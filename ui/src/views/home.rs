use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::contact::Contact;
use crate::portfolio::Portfolio;
use crate::sections::{About, Hero, Services};

/// The single landing page: every section in reading order.
#[component]
pub fn Home() -> Element {
    rsx! {
        SiteHeader {}
        main { class: "site-main",
            Hero {}
            Services {}
            About {}
            Portfolio {}
            Contact {}
        }
        SiteFooter {}
    }
}
