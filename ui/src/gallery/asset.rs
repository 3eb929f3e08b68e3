//! Logical image names → URLs.
//!
//! A base name like `FM_HOME` maps to `/images/FM_HOME-thumb.webp` or
//! `/images/FM_HOME-full.webp`. Anything that already looks like a URL or an
//! absolute path is returned untouched (remote fallbacks use this).

use crate::core::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeVariant {
    /// Grid and carousel.
    Thumb,
    /// Lightbox.
    Full,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 2] = [SizeVariant::Thumb, SizeVariant::Full];

    pub fn token(self) -> &'static str {
        match self {
            SizeVariant::Thumb => "thumb",
            SizeVariant::Full => "full",
        }
    }
}

/// `true` for external URLs and root-relative paths.
pub fn is_absolute(name: &str) -> bool {
    name.starts_with("http") || name.starts_with('/')
}

/// File name of a pre-rendered variant: `<base>-<variant>.<extension>`.
pub fn variant_file_name(base: &str, variant: SizeVariant, extension: &str) -> String {
    format!("{base}-{}.{extension}", variant.token())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    root: String,
    extension: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(config::ASSET_ROOT, config::ASSET_EXTENSION)
    }
}

impl AssetResolver {
    pub fn new(root: impl Into<String>, extension: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            root: root.trim_end_matches('/').to_string(),
            extension: extension.into(),
        }
    }

    pub fn resolve(&self, base: &str, variant: SizeVariant) -> String {
        if base.is_empty() {
            return String::new();
        }
        if is_absolute(base) {
            return base.to_string();
        }
        format!(
            "{}/{}",
            self.root,
            variant_file_name(base, variant, &self.extension)
        )
    }
}

/// Resolve with the site's configured root and extension.
pub fn resolve(base: &str, variant: SizeVariant) -> String {
    AssetResolver::default().resolve(base, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_root_base_variant_extension() {
        let resolver = AssetResolver::new("/images", "webp");
        assert_eq!(
            resolver.resolve("FM_HOME", SizeVariant::Thumb),
            "/images/FM_HOME-thumb.webp"
        );
        assert_eq!(
            resolver.resolve("FM_HOME", SizeVariant::Full),
            "/images/FM_HOME-full.webp"
        );
    }

    #[test]
    fn variants_differ_only_in_size_token() {
        let resolver = AssetResolver::new("/images", "webp");
        for base in ["Student", "ds_home", "business-meeting-over-coffee", "MC_SER_dARK"] {
            let thumb = resolver.resolve(base, SizeVariant::Thumb);
            let full = resolver.resolve(base, SizeVariant::Full);
            assert_ne!(thumb, full);
            assert_eq!(thumb.replacen("-thumb.", "-full.", 1), full);
        }
    }

    #[test]
    fn absolute_inputs_pass_through_for_every_variant() {
        let resolver = AssetResolver::default();
        for input in [
            "https://images.unsplash.com/photo-1?w=1200",
            "http://example.com/a.png",
            "/static/logo.png",
        ] {
            for variant in SizeVariant::ALL {
                assert_eq!(resolver.resolve(input, variant), input);
            }
        }
    }

    #[test]
    fn empty_base_resolves_to_empty() {
        assert_eq!(resolve("", SizeVariant::Full), "");
    }

    #[test]
    fn trailing_slash_on_root_is_ignored() {
        let resolver = AssetResolver::new("https://cdn.example.com/img/", "jpg");
        assert_eq!(
            resolver.resolve("a", SizeVariant::Thumb),
            "https://cdn.example.com/img/a-thumb.jpg"
        );
    }
}
