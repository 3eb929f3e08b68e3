//! Offline generator for the `-thumb` / `-full` image variants the site
//! requests at runtime.

pub mod cli;
pub mod convert;
pub mod error;

pub use convert::{run, OutputFormat, Plan, Summary, VariantSpec};
pub use error::ConvertError;
