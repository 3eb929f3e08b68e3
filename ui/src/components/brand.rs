use dioxus::prelude::*;

/// Curly-brace logo mark. Inherits `currentColor`.
#[component]
pub fn LogoMark(#[props(default = 22)] size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            class: "logo-mark",
            path { d: "M7 5C7 5 3 6 3 12C3 18 7 19 7 19", stroke: "currentColor", stroke_width: "2.5", stroke_linecap: "round" }
            path { d: "M17 5C17 5 21 6 21 12C21 18 17 19 17 19", stroke: "currentColor", stroke_width: "2.5", stroke_linecap: "round" }
            path { d: "M9 15L15 9", stroke: "currentColor", stroke_width: "2.5", stroke_linecap: "round" }
            circle { cx: "9", cy: "15", r: "1.5", fill: "currentColor" }
            circle { cx: "15", cy: "9", r: "1.5", fill: "currentColor" }
            circle { cx: "11.5", cy: "11.5", r: "1", fill: "currentColor", opacity: "0.6" }
        }
    }
}

/// Logo tile plus the two-tone "BlueCode" word mark, linking home.
#[component]
pub fn Brand(#[props(default)] class: String) -> Element {
    rsx! {
        a { class: "brand {class}", href: "#home",
            span { class: "brand__tile", LogoMark {} }
            span { class: "brand__word", "Blue" span { class: "brand__accent", "Code" } }
        }
    }
}
