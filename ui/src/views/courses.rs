use dioxus::prelude::*;

use crate::core::auth::use_auth_signal;
use crate::t;

/// Courses listing; signed-in visitors land here from the hero.
#[component]
pub fn Courses() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let display_name = use_auth_signal().and_then(|auth| auth.read().display_name.clone());

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-courses", dir: crate::i18n::text_direction(),
            h1 { {t!("courses-title")} }
            if let Some(name) = display_name {
                p { class: "page-courses__welcome", {t!("courses-welcome", name = name)} }
            }
            p { {t!("courses-intro")} }
            div { class: "page-courses__empty", {t!("courses-empty")} }
        }
    }
}
