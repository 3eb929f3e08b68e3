pub mod form;
mod view;

pub use form::{ContactDraft, Field, FieldError, FormErrors, Service, SubmitPhase};
pub use view::{service_title, Contact};
