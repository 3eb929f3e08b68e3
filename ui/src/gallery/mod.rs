//! Portfolio imagery: URL resolution, lazy loading, prefetching, the detail
//! carousel and the full-screen lightbox.

pub mod asset;
pub mod carousel;
pub mod lightbox;
pub mod loader;
pub mod nav;
pub mod prefetch;

pub use asset::{resolve, variant_file_name, AssetResolver, SizeVariant};
pub use carousel::Carousel;
pub use lightbox::{Lightbox, LightboxOverlay, Step};
pub use loader::{LazyImage, LoadingStrategy};
pub use nav::GalleryNav;
pub use prefetch::{prefetch_full, prefetch_neighbors, BrowserPrefetcher, Prefetch};
