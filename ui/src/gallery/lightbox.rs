//! Full-screen single-image viewer.
//!
//! State machine: `Closed` ⇄ `Open { index, loading }`. Every transition onto
//! a new image (open, next, prev) starts a load request with `loading = true`;
//! the dismiss control and the caption only render once that request finishes
//! (successfully or via the fallback).

use dioxus::prelude::*;

use crate::core::look::Look;
use crate::core::settings::{use_settings, Direction};
use crate::portfolio::Project;

use super::asset::{resolve, SizeVariant};
use super::carousel::controls_visible;
use super::nav::GalleryNav;
use super::prefetch::{prefetch_neighbors, BrowserPrefetcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// `(i + 1) mod n`. `n` must be non-zero.
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// `(i - 1 + n) mod n`. `n` must be non-zero.
pub fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// `(prev, next)` around `index`, or `None` for an empty gallery.
pub fn neighbors(index: usize, len: usize) -> Option<(usize, usize)> {
    if len == 0 || index >= len {
        return None;
    }
    Some((prev_index(index, len), next_index(index, len)))
}

/// Map an arrow key to a navigation step, mirrored for RTL.
pub fn arrow_step(key: &str, direction: Direction) -> Option<Step> {
    let forward_key = if direction.is_rtl() { "ArrowLeft" } else { "ArrowRight" };
    let back_key = if direction.is_rtl() { "ArrowRight" } else { "ArrowLeft" };
    if key == forward_key {
        Some(Step::Next)
    } else if key == back_key {
        Some(Step::Prev)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        index: usize,
        loading: bool,
        /// Set once the full-size image failed and the project fallback is shown.
        fallback_src: Option<String>,
        /// Identifies the load in flight; callbacks for older requests are dropped.
        request: u64,
    },
}

impl Lightbox {
    fn enter(&mut self, index: usize) -> usize {
        let request = match self {
            Lightbox::Open { request, .. } => request.wrapping_add(1),
            Lightbox::Closed => 0,
        };
        *self = Lightbox::Open {
            index,
            loading: true,
            fallback_src: None,
            request,
        };
        index
    }

    /// Open at `index`. Out-of-range indices (or an empty gallery) leave the
    /// lightbox closed.
    pub fn open(&mut self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        Some(self.enter(index))
    }

    /// Cyclic navigation; no-op while closed.
    ///
    /// Stepping onto the image already shown (a single-image gallery) keeps
    /// the current request: the `<img>` source does not change, so no new
    /// load event would ever clear `loading`.
    pub fn step(&mut self, step: Step, len: usize) -> Option<usize> {
        let current = self.index()?;
        if len == 0 {
            return None;
        }
        let target = match step {
            Step::Next => next_index(current, len),
            Step::Prev => prev_index(current, len),
        };
        if target == current {
            return Some(current);
        }
        Some(self.enter(target))
    }

    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.step(Step::Next, len)
    }

    pub fn prev(&mut self, len: usize) -> Option<usize> {
        self.step(Step::Prev, len)
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    pub fn load_complete(&mut self, for_request: u64) {
        if let Lightbox::Open {
            loading, request, ..
        } = self
        {
            if *request == for_request {
                *loading = false;
            }
        }
    }

    pub fn load_error(&mut self, for_request: u64, fallback: &str) {
        if let Lightbox::Open {
            loading,
            fallback_src,
            request,
            ..
        } = self
        {
            if *request == for_request {
                *fallback_src = Some(fallback.to_string());
                *loading = false;
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index, .. } => Some(*index),
            Lightbox::Closed => None,
        }
    }

    pub fn request(&self) -> Option<u64> {
        match self {
            Lightbox::Open { request, .. } => Some(*request),
            Lightbox::Closed => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Lightbox::Open { loading: true, .. })
    }

    /// Dismiss control and caption are only shown once loading finished.
    pub fn chrome_visible(&self) -> bool {
        matches!(self, Lightbox::Open { loading: false, .. })
    }

    /// Image source for the current index: the fallback after a failure,
    /// otherwise the full-size variant.
    pub fn source(&self, gallery: &[String]) -> Option<String> {
        match self {
            Lightbox::Open {
                fallback_src: Some(src),
                ..
            } => Some(src.clone()),
            Lightbox::Open { index, .. } => gallery
                .get(*index)
                .map(|base| resolve(base, SizeVariant::Full)),
            Lightbox::Closed => None,
        }
    }

    /// `position / total`, hidden while loading.
    pub fn counter(&self, len: usize) -> Option<String> {
        match self {
            Lightbox::Open {
                index,
                loading: false,
                ..
            } => Some(format!("{} / {}", index + 1, len)),
            _ => None,
        }
    }
}

#[component]
pub fn LightboxOverlay(project: Project, mut nav: Signal<GalleryNav>) -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let direction = current.direction();
    let language = current.language;

    let len = project.gallery.len();
    let open_index = use_memo(move || nav.read().lightbox().index());

    // Warm both neighbors whenever the viewed index (or the gallery) changes.
    use_effect(use_reactive((&project.gallery,), move |(gallery,)| {
        if let Some(index) = open_index() {
            prefetch_neighbors(&mut BrowserPrefetcher, &gallery, index);
        }
    }));

    let state = nav.read().lightbox().clone();
    if !state.is_open() {
        return rsx! {};
    }
    let request = state.request().unwrap_or_default();
    let src = state.source(&project.gallery).unwrap_or_default();
    let loading = state.is_loading();
    let counter = state.counter(len);
    let title = project.title.get(language).to_string();
    let fallback = project.fallback_image.clone();
    let show_arrows = controls_visible(len);

    let image_class = if loading {
        "lightbox__image lightbox__image--loading"
    } else {
        "lightbox__image"
    };

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            aria_modal: "true",
            tabindex: 0,
            onmounted: move |evt| async move {
                let _ = evt.data().set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key().to_string();
                if key == "Escape" {
                    evt.prevent_default();
                    nav.with_mut(|n| n.close_image());
                } else if let Some(step) = arrow_step(&key, direction) {
                    evt.prevent_default();
                    nav.with_mut(|n| n.step(step, len));
                }
            },

            if show_arrows {
                button {
                    r#type: "button",
                    class: "lightbox__arrow {look.pin_start()}",
                    aria_label: crate::t!(language, "lightbox-prev"),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        nav.with_mut(|n| n.step(Step::Prev, len));
                    },
                    span { class: look.chevron, "‹" }
                }
                button {
                    r#type: "button",
                    class: "lightbox__arrow {look.pin_end()}",
                    aria_label: crate::t!(language, "lightbox-next"),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        nav.with_mut(|n| n.step(Step::Next, len));
                    },
                    span { class: look.chevron, "›" }
                }
            }

            // Backdrop: clicking anywhere outside the image closes.
            div {
                class: "lightbox__stage",
                onclick: move |_| nav.with_mut(|n| n.close_image()),

                div { class: "lightbox__frame",
                    if loading {
                        div { class: "lightbox__spinner", aria_hidden: "true" }
                    } else {
                        button {
                            r#type: "button",
                            class: "lightbox__close",
                            aria_label: crate::t!(language, "lightbox-close"),
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                nav.with_mut(|n| n.close_image());
                            },
                            "✕"
                        }
                    }

                    img {
                        class: image_class,
                        src: "{src}",
                        alt: crate::t!(language, "lightbox-image-alt"),
                        decoding: "async",
                        "fetchpriority": "high",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        onload: move |_| nav.with_mut(|n| n.image_loaded(request)),
                        onerror: move |_| nav.with_mut(|n| n.image_failed(request, &fallback)),
                    }

                    if let Some(counter) = counter {
                        div { class: "lightbox__caption",
                            span { class: "lightbox__counter", "{counter}" }
                            span { class: "lightbox__title", "{title}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraparound_matches_modular_arithmetic() {
        for len in 1..=6 {
            for i in 0..len {
                assert_eq!(next_index(i, len), (i + 1) % len);
                assert_eq!(prev_index(i, len), (i + len - 1) % len);
            }
        }
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn open_sets_loading_and_hides_chrome() {
        let mut lightbox = Lightbox::default();
        assert_eq!(lightbox.open(2, 4), Some(2));
        assert!(lightbox.is_loading());
        assert!(!lightbox.chrome_visible());
        assert_eq!(lightbox.counter(4), None);
    }

    #[test]
    fn load_complete_reveals_counter() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0, 4);
        let request = lightbox.request().unwrap();
        lightbox.load_complete(request);
        assert!(!lightbox.is_loading());
        assert!(lightbox.chrome_visible());
        assert_eq!(lightbox.counter(4).as_deref(), Some("1 / 4"));
    }

    #[test]
    fn navigation_wraps_and_restarts_loading() {
        let mut lightbox = Lightbox::default();
        lightbox.open(3, 4);
        lightbox.load_complete(lightbox.request().unwrap());

        assert_eq!(lightbox.next(4), Some(0));
        assert!(lightbox.is_loading());
        assert_eq!(lightbox.prev(4), Some(3));
        assert_eq!(lightbox.prev(4), Some(2));
    }

    #[test]
    fn stale_load_does_not_finish_new_request() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0, 3);
        let first = lightbox.request().unwrap();
        lightbox.next(3);
        lightbox.load_complete(first);
        assert!(lightbox.is_loading());
        lightbox.load_error(first, "https://example.com/fallback.jpg");
        assert_eq!(
            lightbox.source(&["a".into(), "b".into(), "c".into()]),
            Some(resolve("b", SizeVariant::Full))
        );
    }

    #[test]
    fn load_error_uses_fallback_and_clears_loading() {
        let gallery = vec!["FM_HOME".to_string(), "FM_CART".to_string()];
        let fallback = "https://images.unsplash.com/photo-1556742049-13e73ce3a789";
        let mut lightbox = Lightbox::default();
        lightbox.open(1, gallery.len());
        assert_eq!(
            lightbox.source(&gallery),
            Some(resolve("FM_CART", SizeVariant::Full))
        );
        lightbox.load_error(lightbox.request().unwrap(), fallback);
        assert_eq!(lightbox.source(&gallery).as_deref(), Some(fallback));
        assert!(!lightbox.is_loading());
        assert!(lightbox.chrome_visible());
    }

    #[test]
    fn close_and_reopen_starts_fresh() {
        let mut lightbox = Lightbox::default();
        lightbox.open(1, 3);
        lightbox.next(3);
        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.next(3), None);
        assert_eq!(lightbox.open(0, 3), Some(0));
        assert!(lightbox.is_loading());
    }

    #[test]
    fn out_of_range_open_stays_closed() {
        let mut lightbox = Lightbox::default();
        assert_eq!(lightbox.open(4, 4), None);
        assert_eq!(lightbox.open(0, 0), None);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn single_image_steps_keep_finished_load() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0, 1);
        let request = lightbox.request().unwrap();
        lightbox.load_complete(request);

        assert_eq!(lightbox.next(1), Some(0));
        assert_eq!(lightbox.prev(1), Some(0));
        assert_eq!(lightbox.request(), Some(request));
        assert!(!lightbox.is_loading());
        assert!(lightbox.chrome_visible());
        assert_eq!(lightbox.counter(1).as_deref(), Some("1 / 1"));
    }

    #[test]
    fn single_image_step_while_loading_still_accepts_the_load() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0, 1);
        let request = lightbox.request().unwrap();
        lightbox.next(1);
        lightbox.load_complete(request);
        assert!(lightbox.chrome_visible());
    }

    #[test]
    fn arrows_mirror_in_rtl() {
        assert_eq!(arrow_step("ArrowRight", Direction::Ltr), Some(Step::Next));
        assert_eq!(arrow_step("ArrowLeft", Direction::Ltr), Some(Step::Prev));
        assert_eq!(arrow_step("ArrowRight", Direction::Rtl), Some(Step::Prev));
        assert_eq!(arrow_step("ArrowLeft", Direction::Rtl), Some(Step::Next));
        assert_eq!(arrow_step("Enter", Direction::Ltr), None);
    }
}
