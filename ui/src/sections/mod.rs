//! Static landing-page sections.

mod about;
mod hero;
mod services;

pub use about::{About, TECH_STACK};
pub use hero::{Hero, Typewriter};
pub use services::Services;
