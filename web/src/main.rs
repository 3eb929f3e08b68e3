use dioxus::prelude::*;

use ui::views::{Home, NotFound, SiteShell};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Blue Code" }

        Router::<Route> {}
    }
}

/// Web router layout around the shared site shell, which owns the settings
/// context and the floating contact button.
#[component]
fn WebShell() -> Element {
    rsx! {
        SiteShell {
            Outlet::<Route> {}
        }
    }
}
