use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, AppShell};
use ui::views::{Courses, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
    #[route("/courses")]
    Courses {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_courses(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Courses {}, "{label}" })
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
        document::Style { "{MAIN_CSS_INLINE}" }

        AppShell {
            Router::<Route> {}
        }
    }
}

#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
