//! Landing-page hero: logo, headline and the call-to-action button.
//!
//! - `content`: display strings (localized bundle, or a struct the caller builds)
//! - `action`: what the button does for the current session
//! - `model`: pure render model built from theme, session and content
//! - `view`: the Dioxus component wiring the three together

mod action;
mod content;
mod model;
mod view;

pub use action::{activate, HeroAction, Navigate, COURSES_ROUTE};
pub use content::HeroContent;
pub use model::{HeroModel, DECOR_SHAPES, DECOR_SPARKS};
pub use view::Hero;
