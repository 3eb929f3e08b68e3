//! Compile-time site configuration.
//!
//! `BLUECODE_ASSET_ROOT` may be set at build time to serve portfolio images
//! from somewhere other than `/images` (e.g. a CDN prefix).

/// Directory (URL path) holding the `-thumb` / `-full` image variants.
pub const ASSET_ROOT: &str = match option_env!("BLUECODE_ASSET_ROOT") {
    Some(root) => root,
    None => "/images",
};

/// File extension written by the `bluecode-images` tool.
pub const ASSET_EXTENSION: &str = "webp";

pub const PHONE_DISPLAY: &str = "+90 552 866 39 98";
pub const PHONE_HREF: &str = "tel:+905528663998";
pub const EMAIL: &str = "llc.bluecode@gmail.com";
pub const EMAIL_HREF: &str = "mailto:llc.bluecode@gmail.com";
pub const WHATSAPP_HREF: &str = "https://wa.me/905528663998";
pub const INSTAGRAM_HREF: &str = "https://www.instagram.com/llc.bluecode?igsh=MXVxOGtvb2hvOHJydQ==";
pub const FACEBOOK_HREF: &str = "https://www.facebook.com/share/14Ucgvkwp5J/";

/// Hero typewriter: delay between revealed characters.
pub const TYPEWRITER_STEP_MS: u64 = 60;

/// Simulated contact submission timings.
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 1_500;
pub const CONTACT_SUCCESS_HOLD_MS: u64 = 5_000;

/// Scroll offset after which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Fraction of the carousel's visible width moved per arrow click.
pub const CAROUSEL_SCROLL_FRACTION: f64 = 0.7;
