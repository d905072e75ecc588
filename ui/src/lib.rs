//! Shared UI crate for Darsak. Views, components and platform-agnostic state
//! live here; the launcher crates only provide routes and contexts.

use dioxus::prelude::*;

pub mod core;
pub mod hero;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod app_shell;
    pub use app_shell::AppShell;

    mod signup_panel;
    pub use signup_panel::SignUpPanel;

    mod theme_toggle;
    pub use theme_toggle::ThemeToggle;
}

pub use hero::Hero;

/// Shared theme stylesheet (also embedded by the desktop launcher).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
