use crate::core::settings::Settings;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use super::theme_toggle::ThemeToggle;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform crates register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the localized label and returns a `Link` that already
/// contains it:
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     courses: |label| rsx!( Link { class: "navbar__link", to: Route::Courses {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder, `AppNavbar` renders its `children` as links.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub courses: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    tracing::debug!(lang = %_lang_marker, "navbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                Settings::update(|settings| settings.language = Some(val.clone()));
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let courses = (b.courses)(&t!("nav-courses"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {courses}
            }
        }
    });

    let brand = t!("brand-name");
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps the navbar subscribed to the language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__controls",
                    ThemeToggle {}

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
