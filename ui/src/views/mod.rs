mod home;
mod not_found;
mod shell;

pub use home::Home;
pub use not_found::NotFound;
pub use shell::SiteShell;
