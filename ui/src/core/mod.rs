//! Cross-cutting helpers: settings context, presentation bundle, persistence,
//! timers and compile-time configuration.

pub mod config;
pub mod look;
pub mod settings;
pub mod storage;
pub mod timing;
