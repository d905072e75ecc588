use crate::core::theme::Theme;
use crate::t;

use super::action::HeroAction;
use super::content::HeroContent;

/// Floating circles behind the copy (position modifiers).
pub const DECOR_SHAPES: [&str; 3] = [
    "hero__shape--top-left",
    "hero__shape--top-right",
    "hero__shape--bottom-left",
];

/// Small dots around the logo (position modifiers).
pub const DECOR_SPARKS: [&str; 3] = [
    "hero__spark--top-right",
    "hero__spark--bottom-left",
    "hero__spark--bottom-right",
];

/// Everything the hero renders, resolved from theme, session and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroModel {
    pub theme: Theme,
    pub action: HeroAction,
    pub root_class: &'static str,
    pub grid_style: &'static str,
    pub top_text: String,
    pub main_title: String,
    pub subtitle: String,
    pub button_label: String,
    /// Configured call-to-action text, shown as a caption under the button.
    pub cta_note: String,
    pub logo_alt: String,
    pub image: Option<String>,
}

impl HeroModel {
    pub fn build(theme: Theme, is_logged_in: bool, content: &HeroContent) -> Self {
        let action = HeroAction::for_session(is_logged_in);
        Self {
            theme,
            action,
            root_class: root_class(theme),
            grid_style: grid_style(theme),
            top_text: content.top_text.clone(),
            main_title: content.main_title.clone(),
            subtitle: content.subtitle.clone(),
            button_label: button_label(action),
            cta_note: content.cta_button_text.clone(),
            logo_alt: content.brand_name.clone(),
            image: content.image.clone(),
        }
    }
}

fn root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "hero hero--light",
        Theme::Dark => "hero hero--dark",
    }
}

fn grid_style(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "background-image: radial-gradient(circle at 1px 1px, #000000 1px, transparent 0); background-size: 40px 40px;"
        }
        Theme::Dark => {
            "background-image: radial-gradient(circle at 1px 1px, #ffffff 1px, transparent 0); background-size: 40px 40px;"
        }
    }
}

/// Button label depends on the session only, never on the content bundle.
fn button_label(action: HeroAction) -> String {
    crate::i18n::init();
    match action {
        HeroAction::GetStarted => t!("hero-button-start-learning"),
        HeroAction::OpenCourses => t!("hero-button-enroll"),
    }
}
