//! Horizontally scrolling thumbnail strip inside the project detail view.

use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::config::CAROUSEL_SCROLL_FRACTION;
use crate::core::look::Look;
use crate::core::settings::{use_settings, Direction};
use crate::portfolio::Project;

use super::asset::SizeVariant;
use super::lightbox::Step;
use super::loader::{LazyImage, LoadingStrategy};
use super::nav::GalleryNav;
use super::prefetch::{prefetch_full, BrowserPrefetcher};

/// Scroll controls only make sense with something to scroll to.
pub fn controls_visible(len: usize) -> bool {
    len > 1
}

/// Horizontal `scrollBy` offset for a control press on a strip `width` px wide.
/// Mirrored in RTL, where "back" content sits to the right.
pub fn scroll_delta(step: Step, width: f64, direction: Direction) -> f64 {
    let amount = width * CAROUSEL_SCROLL_FRACTION;
    let forward = match direction {
        Direction::Ltr => amount,
        Direction::Rtl => -amount,
    };
    match step {
        Step::Next => forward,
        Step::Prev => -forward,
    }
}

fn strip_id(project_id: u32) -> String {
    format!("gallery-strip-{project_id}")
}

#[component]
pub fn Carousel(project: Project, mut nav: Signal<GalleryNav>) -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let direction = current.direction();
    let language = current.language;

    let mut strip: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let len = project.gallery.len();
    let id = strip_id(project.id);
    let title = project.title.get(language).to_string();

    let scroll = move |step: Step| {
        let id = strip_id(project.id);
        async move {
            let Some(mounted) = strip() else {
                return;
            };
            let width = match mounted.get_client_rect().await {
                Ok(rect) => rect.width(),
                Err(err) => {
                    debug!("carousel width unavailable: {err:?}");
                    return;
                }
            };
            let delta = scroll_delta(step, width, direction);
            let _ = document::eval(&format!(
                "document.getElementById('{id}')?.scrollBy({{ left: {delta}, behavior: 'smooth' }});"
            ));
        }
    };

    rsx! {
        div { class: "carousel",
            if controls_visible(len) {
                button {
                    r#type: "button",
                    class: "carousel__control {look.pin_start()} {look.control}",
                    aria_label: crate::t!(language, "carousel-prev"),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        scroll(Step::Prev)
                    },
                    span { class: "{look.chevron} chevron--back", "‹" }
                }
            }

            div {
                id: "{id}",
                class: "carousel__strip",
                onmounted: move |evt| strip.set(Some(evt.data())),

                for (index, base) in project.gallery.iter().enumerate() {
                    button {
                        key: "{index}-{base}",
                        r#type: "button",
                        class: "carousel__item",
                        onmouseenter: {
                            let base = base.clone();
                            move |_| prefetch_full(&mut BrowserPrefetcher, &base)
                        },
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            nav.with_mut(|n| n.open_image(index, len));
                        },
                        LazyImage {
                            base: base.clone(),
                            variant: SizeVariant::Thumb,
                            fallback: project.fallback_image.clone(),
                            alt: format!("{title} {}", index + 1),
                            strategy: LoadingStrategy::for_position(index),
                            class: "carousel__thumb",
                        }
                    }
                }
            }

            if controls_visible(len) {
                button {
                    r#type: "button",
                    class: "carousel__control {look.pin_end()} {look.control}",
                    aria_label: crate::t!(language, "carousel-next"),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        scroll(Step::Next)
                    },
                    span { class: look.chevron, "›" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_hidden_for_single_image() {
        assert!(!controls_visible(0));
        assert!(!controls_visible(1));
        assert!(controls_visible(2));
    }

    #[test]
    fn scroll_moves_seventy_percent_of_width() {
        assert_eq!(scroll_delta(Step::Next, 1000.0, Direction::Ltr), 700.0);
        assert_eq!(scroll_delta(Step::Prev, 1000.0, Direction::Ltr), -700.0);
    }

    #[test]
    fn scroll_is_mirrored_in_rtl() {
        for step in [Step::Prev, Step::Next] {
            assert_eq!(
                scroll_delta(step, 400.0, Direction::Rtl),
                -scroll_delta(step, 400.0, Direction::Ltr)
            );
        }
        assert!(scroll_delta(Step::Prev, 400.0, Direction::Rtl) > 0.0);
    }
}
