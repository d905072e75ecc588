use dioxus::prelude::*;

use crate::components::SignUpPanel;
use crate::hero::Hero;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut signup_open = use_signal(|| false);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            Hero { on_get_started: move |_| signup_open.set(true) }
            if signup_open() {
                SignUpPanel { on_close: move |_| signup_open.set(false) }
            }
        }
    }
}
