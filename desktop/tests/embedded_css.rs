#![cfg(test)]
//! The desktop shell inlines `ui::THEME_CSS_INLINE` instead of bundling the
//! stylesheet, so RTL mirroring and the lightbox only work if those rules
//! survive in that string. These checks look inside the rule bodies, not just
//! for the selector names.

const THEME_CSS: &str = ui::THEME_CSS_INLINE;

/// Body of the first top-level `selector { ... }` rule.
fn rule_body<'a>(css: &'a str, selector: &str) -> Option<&'a str> {
    let head = format!("\n{selector} {{");
    let start = css.find(&head)? + head.len();
    let len = css[start..].find('}')?;
    Some(css[start..start + len].trim())
}

#[test]
fn inlined_theme_is_the_shared_stylesheet() {
    let on_disk = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ui/assets/theme/main.css"
    ));
    assert_eq!(THEME_CSS, on_disk);
    assert!(THEME_CSS.contains("--color-brand:"));
}

#[test]
fn pin_classes_anchor_opposite_edges() {
    let left = rule_body(THEME_CSS, ".pin-left").expect(".pin-left rule");
    let right = rule_body(THEME_CSS, ".pin-right").expect(".pin-right rule");
    assert!(left.contains("left: 1.5rem") && left.contains("right: auto"), "{left}");
    assert!(right.contains("right: 1.5rem") && right.contains("left: auto"), "{right}");
}

#[test]
fn flipped_chevron_mirrors_horizontally() {
    let flipped = rule_body(THEME_CSS, ".chevron--flipped").expect(".chevron--flipped rule");
    assert!(flipped.contains("scaleX(-1)"), "{flipped}");
}

#[test]
fn floating_button_overrides_both_sides() {
    for (selector, edge) in [
        (".floating-contact.pin-left", "left:"),
        (".floating-contact.pin-right", "right:"),
    ] {
        let body = rule_body(THEME_CSS, selector).unwrap_or_else(|| panic!("{selector} missing"));
        assert!(body.contains(edge), "{selector} should set `{edge}`");
    }
}

#[test]
fn rtl_root_switches_to_arabic_font() {
    let rtl = rule_body(THEME_CSS, ".site--rtl").expect(".site--rtl rule");
    assert!(rtl.contains("--font-arabic"), "{rtl}");
}

#[test]
fn lightbox_loading_hides_image_and_shows_spinner() {
    let loading =
        rule_body(THEME_CSS, ".lightbox__image--loading").expect("loading image rule");
    assert!(loading.contains("opacity"), "{loading}");
    let spinner = rule_body(THEME_CSS, ".lightbox__spinner").expect("spinner rule");
    assert!(spinner.contains("animation"), "{spinner}");
}

#[test]
fn reduced_motion_is_respected() {
    assert!(THEME_CSS.contains("@media (prefers-reduced-motion: reduce)"));
}
