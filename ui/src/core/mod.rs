//! Platform-agnostic state shared by the views: theme marker, session and
//! persisted settings.

pub mod auth;
pub mod settings;
pub mod theme;
