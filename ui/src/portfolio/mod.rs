//! Project catalog and the portfolio section built on it.

pub mod catalog;
mod view;

pub use catalog::{catalog, Catalog, CatalogError, Category, Filter, Localized, Project};
pub use view::Portfolio;
