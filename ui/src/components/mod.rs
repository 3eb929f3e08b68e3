//! Page chrome shared by every view.

pub mod anchors;
mod brand;
mod contact_button;
mod footer;
mod site_header;

pub use anchors::Anchor;
pub use brand::{Brand, LogoMark};
pub use contact_button::FloatingContact;
pub use footer::SiteFooter;
pub use site_header::{is_scrolled, SiteHeader};
