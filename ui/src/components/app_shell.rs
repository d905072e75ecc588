use dioxus::prelude::*;

use crate::core::auth::AuthState;
use crate::core::settings::Settings;
use crate::core::theme::{use_theme_flag_for, ThemeRoot};
use crate::i18n;

/// Root of every launcher. Restores the stored settings, then provides the
/// contexts the views read:
/// - `ThemeRoot` (the marker the navbar toggles and the hero observes)
/// - `Signal<AuthState>` (session, signed out at launch)
/// - `Signal<String>` (active language code)
///
/// The wrapper carries `dark` while the marker is set, so theme selectors
/// apply even where the root is not the document.
#[component]
pub fn AppShell(children: Element) -> Element {
    i18n::init();

    let root = use_hook(|| {
        let root = ThemeRoot::platform_default();
        Settings::load_or_default().apply(&root);
        root
    });
    use_context_provider(|| root.clone());

    let auth = use_signal(AuthState::signed_out);
    use_context_provider(|| auth);

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    let is_dark = use_theme_flag_for(root);
    let shell_class = if is_dark() { "app-shell dark" } else { "app-shell" };

    rsx! {
        div {
            class: shell_class,
            dir: i18n::text_direction(),
            // Keyed by language so the routed subtree remounts on change.
            div { key: "{lang_code()}", {children} }
        }
    }
}
