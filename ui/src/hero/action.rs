use dioxus::prelude::Navigator;

/// Route the button opens for signed-in users.
pub const COURSES_ROUTE: &str = "/courses";

/// Outcome of a button activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    /// Navigate to [`COURSES_ROUTE`].
    OpenCourses,
    /// Hand over to the parent's sign-up flow.
    GetStarted,
}

impl HeroAction {
    pub fn for_session(is_logged_in: bool) -> Self {
        if is_logged_in {
            Self::OpenCourses
        } else {
            Self::GetStarted
        }
    }
}

/// Programmatic navigation seam; the router's [`Navigator`] in the app.
pub trait Navigate {
    fn navigate_to(&self, path: &str);
}

impl Navigate for Navigator {
    fn navigate_to(&self, path: &str) {
        if let Some(failure) = self.push(path) {
            tracing::warn!(path, ?failure, "navigation failed");
        }
    }
}

/// Run the button action for the current session. Each call performs the
/// action again.
pub fn activate<N, F>(is_logged_in: bool, navigator: &N, on_get_started: F) -> HeroAction
where
    N: Navigate + ?Sized,
    F: FnOnce(),
{
    let action = HeroAction::for_session(is_logged_in);
    match action {
        HeroAction::OpenCourses => navigator.navigate_to(COURSES_ROUTE),
        HeroAction::GetStarted => on_get_started(),
    }
    tracing::debug!(?action, "hero button activated");
    action
}
