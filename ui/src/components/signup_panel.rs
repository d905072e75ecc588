use dioxus::prelude::*;

use crate::core::auth::{use_auth_signal, AuthState};
use crate::t;

/// Minimal sign-up flow opened from the hero for signed-out visitors.
/// Submitting marks the session as signed in.
#[component]
pub fn SignUpPanel(on_close: EventHandler<()>) -> Element {
    let auth = use_auth_signal();
    let mut name = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match auth {
            Some(mut auth) => {
                auth.set(AuthState::signed_in(name()));
                tracing::info!("session signed in from sign-up panel");
            }
            None => tracing::warn!("no auth store provided; sign-up ignored"),
        }
        on_close.call(());
    };

    rsx! {
        div { class: "signup", role: "dialog", aria_labelledby: "signup-title",
            form { class: "signup__card", onsubmit: on_submit,
                h2 { id: "signup-title", class: "signup__title", {t!("signup-title")} }
                p { class: "signup__intro", {t!("signup-intro")} }
                label { class: "signup__label", r#for: "signup-name", {t!("signup-name-label")} }
                input {
                    id: "signup-name",
                    class: "signup__input",
                    r#type: "text",
                    placeholder: t!("signup-name-placeholder"),
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                div { class: "signup__actions",
                    button { r#type: "submit", class: "button button--primary", {t!("signup-submit")} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_close.call(()),
                        {t!("signup-cancel")}
                    }
                }
            }
        }
    }
}
