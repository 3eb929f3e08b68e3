//! Placeholder-until-loaded image with a one-shot fallback.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::asset::{AssetResolver, SizeVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingStrategy {
    /// Only for the first item of a freshly opened view.
    Eager,
    #[default]
    Lazy,
}

impl LoadingStrategy {
    pub fn as_attr(self) -> &'static str {
        match self {
            LoadingStrategy::Eager => "eager",
            LoadingStrategy::Lazy => "lazy",
        }
    }

    /// Eager for the first entry of a list, lazy for the rest.
    pub fn for_position(index: usize) -> Self {
        if index == 0 {
            LoadingStrategy::Eager
        } else {
            LoadingStrategy::Lazy
        }
    }
}

/// Display-slot state of a [`LazyImage`].
///
/// Every retarget bumps `generation`; load/error callbacks carry the
/// generation they were issued under and stale ones are dropped, so a slow
/// response for an old image can never mark the new one as loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LazyImageState {
    base: String,
    variant: SizeVariant,
    src: String,
    loaded: bool,
    fell_back: bool,
    failed: bool,
    generation: u64,
}

impl LazyImageState {
    pub fn new(resolver: &AssetResolver, base: &str, variant: SizeVariant) -> Self {
        Self {
            base: base.to_string(),
            variant,
            src: resolver.resolve(base, variant),
            loaded: false,
            fell_back: false,
            failed: false,
            generation: 0,
        }
    }

    /// Point the slot at a new image. Returns `false` when the target is unchanged.
    pub fn retarget(&mut self, resolver: &AssetResolver, base: &str, variant: SizeVariant) -> bool {
        if self.base == base && self.variant == variant {
            return false;
        }
        self.base = base.to_string();
        self.variant = variant;
        self.src = resolver.resolve(base, variant);
        self.loaded = false;
        self.fell_back = false;
        self.failed = false;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// What the slot shows for `base`/`variant` right now, before the
    /// retarget is committed. Matches the committed state (same generation),
    /// so callbacks issued from this view are accepted afterwards.
    pub fn for_target(&self, resolver: &AssetResolver, base: &str, variant: SizeVariant) -> Self {
        let mut view = self.clone();
        view.retarget(resolver, base, variant);
        view
    }

    pub fn on_load(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loaded = true;
        true
    }

    /// Swap to `fallback` on the first failure. A failing fallback is not
    /// retried; the slot keeps its (static) placeholder.
    pub fn on_error(&mut self, generation: u64, fallback: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        if self.fell_back || fallback.is_empty() || self.src == fallback {
            self.failed = true;
            return true;
        }
        self.src = fallback.to_string();
        self.fell_back = true;
        true
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn used_fallback(&self) -> bool {
        self.fell_back
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

#[component]
pub fn LazyImage(
    base: String,
    variant: SizeVariant,
    fallback: String,
    alt: String,
    #[props(default)] strategy: LoadingStrategy,
    #[props(default)] class: String,
) -> Element {
    let mut state = use_signal(|| LazyImageState::new(&AssetResolver::default(), &base, variant));

    use_effect(use_reactive((&base, &variant), move |(base, variant)| {
        state.with_mut(|s| s.retarget(&AssetResolver::default(), &base, variant));
    }));

    let snapshot = state.read().for_target(&AssetResolver::default(), &base, variant);
    let generation = snapshot.generation();
    let loaded = snapshot.is_loaded();
    let skeleton_class = if snapshot.has_failed() {
        "lazy-image__skeleton"
    } else {
        "lazy-image__skeleton lazy-image__skeleton--pulse"
    };
    let img_class = if loaded {
        "lazy-image__img lazy-image__img--visible"
    } else {
        "lazy-image__img"
    };

    rsx! {
        div { class: "lazy-image {class}",
            if !loaded {
                div { class: skeleton_class, aria_hidden: "true" }
            }
            img {
                class: img_class,
                src: "{snapshot.src()}",
                alt: "{alt}",
                loading: strategy.as_attr(),
                decoding: "async",
                onload: move |_| {
                    state.with_mut(|s| s.on_load(generation));
                },
                onerror: move |_| {
                    debug!(fallback = %fallback, "image failed to load; using fallback");
                    state.with_mut(|s| s.on_error(generation, &fallback));
                },
            }
        }
    }
}
