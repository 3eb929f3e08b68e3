//! Best-effort cache warming for images the user is likely to open next.

use super::asset::{resolve, SizeVariant};
use super::lightbox::neighbors;

pub trait Prefetch {
    /// Request `url` speculatively. Must not block and must not report errors.
    fn prefetch(&mut self, url: &str);
}

/// Issues a detached, async-decoded image request in the host page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrefetcher;

impl Prefetch for BrowserPrefetcher {
    fn prefetch(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        warm(url);
    }
}

#[cfg(target_arch = "wasm32")]
fn warm(url: &str) {
    if let Ok(img) = web_sys::HtmlImageElement::new() {
        img.set_decoding("async");
        img.set_src(url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn warm(url: &str) {
    let Ok(literal) = serde_json::to_string(url) else {
        return;
    };
    let _ = dioxus::prelude::document::eval(&format!(
        "(() => {{ const img = new Image(); img.decoding = 'async'; img.src = {literal}; }})();"
    ));
}

/// Warm the full-size variant of `base`.
pub fn prefetch_full(prefetcher: &mut impl Prefetch, base: &str) {
    prefetcher.prefetch(&resolve(base, SizeVariant::Full));
}

/// Warm the full-size images on either side of `index` (cyclic). Neighbors
/// equal to `index` itself are skipped, and a two-image gallery warms its
/// single neighbor once.
pub fn prefetch_neighbors(prefetcher: &mut impl Prefetch, gallery: &[String], index: usize) {
    let Some((prev, next)) = neighbors(index, gallery.len()) else {
        return;
    };
    if next != index {
        prefetch_full(prefetcher, &gallery[next]);
    }
    if prev != index && prev != next {
        prefetch_full(prefetcher, &gallery[prev]);
    }
}

#[cfg(test)]
impl Prefetch for Vec<String> {
    fn prefetch(&mut self, url: &str) {
        if !url.is_empty() {
            self.push(url.to_string());
        }
    }
}
