use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, AppShell};
use ui::views::{Courses, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/courses")]
    Courses {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_courses(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Courses {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        courses: nav_courses,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        AppShell {
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared navbar component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
