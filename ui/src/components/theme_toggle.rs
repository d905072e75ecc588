use dioxus::prelude::*;

use crate::core::settings::Settings;
use crate::core::theme::{use_theme_flag_for, use_theme_root};
use crate::t;

/// Flips the dark marker on the shared root and remembers the choice.
///
/// This is the only writer of the marker after launch; everything else
/// observes it.
#[component]
pub fn ThemeToggle() -> Element {
    let root = use_theme_root();
    let is_dark = use_theme_flag_for(root.clone());

    let on_toggle = move |_: MouseEvent| {
        let theme = root.toggle();
        Settings::update(|settings| settings.dark_mode = theme.is_dark());
    };

    let (icon, label) = if is_dark() {
        ("☀", t!("nav-theme-to-light"))
    } else {
        ("☾", t!("nav-theme-to-dark"))
    };

    rsx! {
        button {
            r#type: "button",
            class: "navbar__theme-toggle",
            aria_label: "{label}",
            aria_pressed: "{is_dark()}",
            title: "{label}",
            onclick: on_toggle,
            "{icon}"
        }
    }
}
