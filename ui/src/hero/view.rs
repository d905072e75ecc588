use dioxus::prelude::*;

use crate::core::auth::use_auth_status;
use crate::core::theme::{use_theme_flag, Theme};

use super::action::activate;
use super::content::HeroContent;
use super::model::{HeroModel, DECOR_SHAPES, DECOR_SPARKS};

const LOGO: Asset = asset!("/assets/hero/logo.svg");

/// Landing hero. `on_get_started` runs when a signed-out visitor presses the
/// button; signed-in users are sent to the courses listing instead.
#[component]
pub fn Hero(on_get_started: EventHandler<()>, content: Option<HeroContent>) -> Element {
    crate::i18n::init();

    // Re-render on language change (global code signal provided by launchers).
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|c| c()).unwrap_or_default();

    let is_dark = use_theme_flag();
    let is_logged_in = use_auth_status();

    let content = content.unwrap_or_else(HeroContent::localized);
    let model = HeroModel::build(Theme::from_dark_flag(is_dark()), is_logged_in, &content);
    let dir = crate::i18n::text_direction();

    tracing::debug!(theme = ?model.theme, action = ?model.action, "hero render");

    let on_activate = move |_: MouseEvent| {
        let nav = navigator();
        activate(is_logged_in, &nav, || on_get_started.call(()));
    };

    rsx! {
        div { class: "{model.root_class}", dir: "{dir}",
            div { class: "hero__backdrop", aria_hidden: "true",
                div { class: "hero__tint" }
                for shape in DECOR_SHAPES {
                    div { key: "{shape}", class: "hero__shape {shape}" }
                }
                div { class: "hero__grid",
                    div { class: "hero__grid-dots", style: "{model.grid_style}" }
                }
            }

            section { class: "hero__section",
                div { class: "hero__layout",
                    div { class: "hero__art",
                        div { class: "hero__logo-frame",
                            if let Some(src) = model.image.as_ref() {
                                img { class: "hero__logo", src: "{src}", alt: "{model.logo_alt}" }
                            } else {
                                img { class: "hero__logo", src: LOGO, alt: "{model.logo_alt}" }
                            }
                            div { class: "hero__glow" }
                        }
                        div { class: "hero__underline" }
                        for spark in DECOR_SPARKS {
                            div { key: "{spark}", class: "hero__spark {spark}" }
                        }
                    }

                    div { class: "hero__copy",
                        div { class: "hero__badge", "{model.top_text}" }
                        h1 { class: "hero__title", "{model.main_title}" }
                        p { class: "hero__subtitle", "{model.subtitle}" }
                        div { class: "hero__actions",
                            button {
                                r#type: "button",
                                class: "button button--primary hero__button",
                                onclick: on_activate,
                                span { class: "hero__button-sheen" }
                                span { class: "hero__button-label", "{model.button_label}" }
                            }
                            p { class: "hero__cta-note", "{model.cta_note}" }
                        }
                    }
                }
            }
        }
    }
}
