//! Static project catalog driving the portfolio grid, detail modal and lightbox.
//!
//! The records ship as `assets/catalog/projects.json`, embedded at compile
//! time and parsed once. Records are immutable after load.

use std::collections::HashSet;
use std::fmt;

use dioxus::logger::tracing::error;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::settings::Language;

const CATALOG_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/catalog/projects.json"
));

static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(CATALOG_JSON) {
    Ok(catalog) => catalog,
    Err(err) => {
        error!("portfolio catalog rejected: {err}");
        Catalog::default()
    }
});

/// The shipped catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Student,
    Consulting,
    #[serde(rename = "uiux")]
    UiUx,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Student => "student",
            Category::Consulting => "consulting",
            Category::UiUx => "uiux",
        }
    }
}

/// Grid filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter buttons in display order.
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Web),
        Filter::Only(Category::Student),
        Filter::Only(Category::Consulting),
        Filter::Only(Category::UiUx),
    ];

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.key(),
        }
    }
}

/// A string carried in every site language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Localized {
    pub en: String,
    pub ar: String,
}

impl Localized {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: Localized,
    pub client: String,
    pub category: Category,
    /// Grid thumbnail: base name or absolute URL.
    pub image: String,
    /// Ordered base names (or absolute URLs); never empty.
    pub gallery: Vec<String>,
    pub description: Localized,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Shown whenever one of the project's own images fails to load.
    pub fallback_image: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    pub fn first_image(&self) -> Option<&str> {
        self.gallery.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse(String),
    EmptyGallery { id: u32 },
    EmptyImageName { id: u32 },
    MissingFallback { id: u32 },
    DuplicateId { id: u32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "invalid catalog JSON: {msg}"),
            CatalogError::EmptyGallery { id } => write!(f, "project {id} has an empty gallery"),
            CatalogError::EmptyImageName { id } => {
                write!(f, "project {id} references an empty image name")
            }
            CatalogError::MissingFallback { id } => {
                write!(f, "project {id} has no fallback image")
            }
            CatalogError::DuplicateId { id } => write!(f, "project id {id} is used twice"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::new(projects)
    }

    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            let id = project.id;
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId { id });
            }
            if project.gallery.is_empty() {
                return Err(CatalogError::EmptyGallery { id });
            }
            if project.image.trim().is_empty()
                || project.gallery.iter().any(|name| name.trim().is_empty())
            {
                return Err(CatalogError::EmptyImageName { id });
            }
            if project.fallback_image.trim().is_empty() {
                return Err(CatalogError::MissingFallback { id });
            }
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects passing `filter`, in catalog order.
    pub fn filtered(&self, filter: Filter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn shipped_catalog_validates() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("shipped catalog must validate");
        assert_eq!(catalog.projects().len(), 5);
        assert_eq!(catalog, *super::catalog());
    }

    #[test]
    fn all_filter_keeps_original_order() {
        let catalog = super::catalog();
        assert_eq!(ids(&catalog.filtered(Filter::All)), vec![1, 3, 2, 4, 5]);
    }

    #[test]
    fn category_filter_returns_exact_subset() {
        let catalog = super::catalog();
        for filter in Filter::ALL {
            let Filter::Only(category) = filter else {
                continue;
            };
            let filtered = catalog.filtered(filter);
            let expected: Vec<u32> = catalog
                .projects()
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filtered), expected, "filter {}", filter.key());
            assert!(filtered.iter().all(|p| p.category == category));
        }
        assert_eq!(ids(&catalog.filtered(Filter::Only(Category::Web))), vec![1, 3]);
    }

    #[test]
    fn student_project_has_single_image_gallery() {
        let project = super::catalog().get(2).expect("project 2 exists");
        assert_eq!(project.gallery, vec!["Student".to_string()]);
        assert_eq!(project.category, Category::Student);
        assert!(project.url.is_none());
    }

    #[test]
    fn localized_fields_follow_language() {
        let project = super::catalog().get(1).unwrap();
        assert_eq!(project.title.get(Language::En), "Flare Mug E-commerce");
        assert_eq!(project.title.get(Language::Ar), "متجر Flare Mug");
    }

    #[test]
    fn rejects_empty_gallery() {
        let raw = r#"[{
            "id": 9, "title": {"en": "x", "ar": "x"}, "client": "c", "category": "web",
            "image": "a", "gallery": [], "description": {"en": "", "ar": ""},
            "fallback_image": "https://example.com/x.jpg"
        }]"#;
        assert_eq!(
            Catalog::from_json(raw),
            Err(CatalogError::EmptyGallery { id: 9 })
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let one = r#"{
            "id": 1, "title": {"en": "x", "ar": "x"}, "client": "c", "category": "uiux",
            "image": "a", "gallery": ["a"], "description": {"en": "", "ar": ""},
            "fallback_image": "https://example.com/x.jpg"
        }"#;
        let raw = format!("[{one},{one}]");
        assert_eq!(
            Catalog::from_json(&raw),
            Err(CatalogError::DuplicateId { id: 1 })
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let raw = r#"[{
            "id": 1, "title": {"en": "x", "ar": "x"}, "client": "c", "category": "games",
            "image": "a", "gallery": ["a"], "description": {"en": "", "ar": ""},
            "fallback_image": "https://example.com/x.jpg"
        }]"#;
        assert!(matches!(Catalog::from_json(raw), Err(CatalogError::Parse(_))));
    }
}
